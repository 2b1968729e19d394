// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use rangecal_grid::{CellMeasure, CellRange};

use crate::transition::bubble_bounds;
use crate::{
    AppearAlpha, AppearBubble, DualAlpha, DualBubble, MoveToCell, RangeToRange,
    SelectionTransition,
};

/// Advances a [`SelectionTransition`] to a point of its animation.
///
/// Easing is applied by the animation driver before `fraction` reaches the
/// controller.
pub trait TransitionController {
    /// Updates the interpolated fields of `transition` for `fraction`, in `0..=1`.
    ///
    /// The same transition is updated on every frame; implementations must not
    /// assume fractions arrive in any particular order.
    fn handle_transition(
        &self,
        transition: &mut SelectionTransition,
        measure: &dyn CellMeasure,
        fraction: f64,
    );
}

/// Linear interpolation of every transition kind.
///
/// ```rust
/// use rangecal_grid::{Cell, UniformGridMeasure};
/// use rangecal_selection::{
///     DefaultTransitionController, SelectionManager, SelectionRenderOptions, SelectionTransition,
///     TransitionController,
/// };
///
/// let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
/// let mut manager = SelectionManager::new();
/// manager.set_state(Cell::new(3), Cell::new(3), &measure);
///
/// let mut transition = manager
///     .create_transition(&SelectionRenderOptions::default(), &measure)
///     .unwrap();
///
/// DefaultTransitionController.handle_transition(&mut transition, &measure, 0.25);
/// let SelectionTransition::AppearAlpha(appear) = transition else {
///     unreachable!();
/// };
/// assert_eq!(appear.alpha, 0.25);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTransitionController;

impl TransitionController for DefaultTransitionController {
    fn handle_transition(
        &self,
        transition: &mut SelectionTransition,
        measure: &dyn CellMeasure,
        fraction: f64,
    ) {
        match transition {
            SelectionTransition::AppearAlpha(AppearAlpha {
                is_reversed, alpha, ..
            }) => {
                *alpha = reversed_if(fraction, *is_reversed);
            }
            SelectionTransition::AppearBubble(AppearBubble {
                base,
                is_reversed,
                bounds,
            }) => {
                *bounds = bubble_bounds(base, reversed_if(fraction, *is_reversed));
            }
            SelectionTransition::DualAlpha(DualAlpha {
                start_alpha,
                end_alpha,
                ..
            }) => {
                *start_alpha = 1.0 - fraction;
                *end_alpha = fraction;
            }
            SelectionTransition::DualBubble(DualBubble {
                start,
                end,
                start_bounds,
                end_bounds,
            }) => {
                *start_bounds = bubble_bounds(start, 1.0 - fraction);
                *end_bounds = bubble_bounds(end, fraction);
            }
            SelectionTransition::MoveToCell(t) => move_to_cell(t, measure, fraction),
            SelectionTransition::RangeToRange(t) => range_to_range(t, measure, fraction),
        }
    }
}

fn move_to_cell(t: &mut MoveToCell, measure: &dyn CellMeasure, fraction: f64) {
    let (Some(start), Some(end)) = (t.start.shape_info(), t.end.shape_info()) else {
        return;
    };

    let left = lerp(start.start_left, end.start_left, fraction);
    let top = lerp(start.start_top, end.start_top, fraction);

    let info = &mut t.shape_info;
    info.start_left = left;
    info.start_top = top;
    info.end_right = left + info.cell_width;
    info.end_top = top;

    let center = Point::new(
        left + info.cell_width * 0.5,
        top + info.cell_height * 0.5,
    );

    // Between two cells the center may fall into a gap; keep the last cell then.
    if let Some(cell) = measure.cell_at(center) {
        info.range = CellRange::single(cell);
    }
}

fn range_to_range(t: &mut RangeToRange, measure: &dyn CellMeasure, fraction: f64) {
    let start_distance = lerp(
        t.start_state_start_cell_distance,
        t.end_state_start_cell_distance,
        fraction,
    );
    let end_distance = lerp(
        t.start_state_end_cell_distance,
        t.end_state_end_cell_distance,
        fraction,
    );

    t.start_cell_distance = start_distance;
    t.end_cell_distance = end_distance;

    let cw = measure.cell_width();

    let (start_cell, start_point) = measure.cell_and_point_by_distance(start_distance);
    let (end_cell, end_point) = measure.cell_and_point_by_distance(end_distance - cw);

    let info = &mut t.shape_info;
    info.range = CellRange::new(start_cell, end_cell);
    info.start_top = start_point.y;
    info.end_top = end_point.y;

    // Distances between the end of one row and the start of the next map past
    // the outer cells; keep both ends on the cells of their row.
    let row_left = info.first_cell_on_row_left;
    let row_right = info.last_cell_on_row_right;
    info.start_left = start_point.x.max(row_left).min(row_right);
    info.end_right = (end_point.x + cw).max(row_left).min(row_right);
}

fn reversed_if(fraction: f64, is_reversed: bool) -> f64 {
    if is_reversed { 1.0 - fraction } else { fraction }
}

/// Interpolates between `a` and `b`, hitting both ends exactly.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let (a, b) = (0.1, 0.7);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert!((lerp(a, b, 0.5) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn reversal() {
        assert_eq!(reversed_if(0.25, false), 0.25);
        assert_eq!(reversed_if(0.25, true), 0.75);
    }
}
