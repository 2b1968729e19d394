// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated transitions between two steady selection states.

use kurbo::{Point, Rect, Size};
use rangecal_grid::{Cell, CellMeasure};
use rangecal_shape::SelectionShapeInfo;

use crate::SelectionState;

/// Alpha at or above which a fading selection counts as covering a cell.
const VISIBLE_ALPHA: f64 = 0.5;

/// A selection fading in (or out, when reversed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppearAlpha {
    /// The state that appears or disappears.
    pub base: SelectionState,
    /// `true` when the state disappears.
    pub is_reversed: bool,
    /// Current opacity, `0..=1`.
    pub alpha: f64,
}

/// A cell growing from its center (or shrinking into it, when reversed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppearBubble {
    /// The cell state that appears or disappears.
    pub base: SelectionState,
    /// `true` when the state disappears.
    pub is_reversed: bool,
    /// Current bounds of the bubble.
    pub bounds: Rect,
}

/// One selection fading out while another fades in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualAlpha {
    /// The state that fades out.
    pub start: SelectionState,
    /// The state that fades in.
    pub end: SelectionState,
    /// Current opacity of `start`.
    pub start_alpha: f64,
    /// Current opacity of `end`.
    pub end_alpha: f64,
}

/// One cell shrinking into its center while another grows from its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualBubble {
    /// The cell state that shrinks.
    pub start: SelectionState,
    /// The cell state that grows.
    pub end: SelectionState,
    /// Current bounds of the shrinking bubble.
    pub start_bounds: Rect,
    /// Current bounds of the growing bubble.
    pub end_bounds: Rect,
}

/// A cell sliding along its row or column to another cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveToCell {
    /// The cell state the slide starts at.
    pub start: SelectionState,
    /// The cell state the slide ends at.
    pub end: SelectionState,
    /// Current geometry of the moving cell. Its range is the cell under the
    /// moving cell's center.
    pub shape_info: SelectionShapeInfo,
}

/// A range stretching or shrinking into an intersecting range.
///
/// The ends of both ranges are projected onto the grid's row-flow axis with
/// [`CellMeasure::cell_distance`]; the transition interpolates those
/// distances and maps them back onto the grid. End distances refer to the
/// right edge of the last cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeToRange {
    /// The range state the transition starts at.
    pub start: SelectionState,
    /// The range state the transition ends at.
    pub end: SelectionState,
    /// Distance of the first cell of `start`.
    pub start_state_start_cell_distance: f64,
    /// Distance of the right edge of the last cell of `start`.
    pub start_state_end_cell_distance: f64,
    /// Distance of the first cell of `end`.
    pub end_state_start_cell_distance: f64,
    /// Distance of the right edge of the last cell of `end`.
    pub end_state_end_cell_distance: f64,
    /// Current distance of the start of the range.
    pub start_cell_distance: f64,
    /// Current distance of the end of the range.
    pub end_cell_distance: f64,
    /// Current geometry of the range.
    pub shape_info: SelectionShapeInfo,
}

/// An in-flight animation between the previous and the current selection.
///
/// Created by [`SelectionManager::create_transition`](crate::SelectionManager::create_transition)
/// in the state it has at fraction `0`, and advanced by a
/// [`TransitionController`](crate::TransitionController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionTransition {
    /// See [`AppearAlpha`].
    AppearAlpha(AppearAlpha),
    /// See [`AppearBubble`].
    AppearBubble(AppearBubble),
    /// See [`DualAlpha`].
    DualAlpha(DualAlpha),
    /// See [`DualBubble`].
    DualBubble(DualBubble),
    /// See [`MoveToCell`].
    MoveToCell(MoveToCell),
    /// See [`RangeToRange`].
    RangeToRange(RangeToRange),
}

impl SelectionTransition {
    pub(crate) fn appear_alpha(base: SelectionState, is_reversed: bool) -> Self {
        Self::AppearAlpha(AppearAlpha {
            base,
            is_reversed,
            alpha: if is_reversed { 1.0 } else { 0.0 },
        })
    }

    pub(crate) fn appear_bubble(base: SelectionState, is_reversed: bool) -> Self {
        Self::AppearBubble(AppearBubble {
            base,
            is_reversed,
            bounds: bubble_bounds(&base, if is_reversed { 1.0 } else { 0.0 }),
        })
    }

    pub(crate) fn dual_alpha(start: SelectionState, end: SelectionState) -> Self {
        Self::DualAlpha(DualAlpha {
            start,
            end,
            start_alpha: 1.0,
            end_alpha: 0.0,
        })
    }

    pub(crate) fn dual_bubble(start: SelectionState, end: SelectionState) -> Self {
        Self::DualBubble(DualBubble {
            start,
            end,
            start_bounds: bubble_bounds(&start, 1.0),
            end_bounds: bubble_bounds(&end, 0.0),
        })
    }

    pub(crate) fn move_to_cell(start: SelectionState, end: SelectionState) -> Self {
        Self::MoveToCell(MoveToCell {
            start,
            end,
            shape_info: start.shape_info().copied().unwrap_or_default(),
        })
    }

    pub(crate) fn range_to_range<M: CellMeasure + ?Sized>(
        start: SelectionState,
        end: SelectionState,
        measure: &M,
    ) -> Self {
        let start_range = start.range();
        let end_range = end.range();

        let cw = measure.cell_width();
        let start_state_start_cell_distance = measure.cell_distance(start_range.start());
        let start_state_end_cell_distance = measure.cell_distance(start_range.end()) + cw;

        Self::RangeToRange(RangeToRange {
            start,
            end,
            start_state_start_cell_distance,
            start_state_end_cell_distance,
            end_state_start_cell_distance: measure.cell_distance(end_range.start()),
            end_state_end_cell_distance: measure.cell_distance(end_range.end()) + cw,
            start_cell_distance: start_state_start_cell_distance,
            end_cell_distance: start_state_end_cell_distance,
            shape_info: start.shape_info().copied().unwrap_or_default(),
        })
    }

    /// The state the transition starts at.
    #[must_use]
    pub fn start(&self) -> SelectionState {
        match self {
            Self::AppearAlpha(t) => appear_ends(t.base, t.is_reversed).0,
            Self::AppearBubble(t) => appear_ends(t.base, t.is_reversed).0,
            Self::DualAlpha(DualAlpha { start, .. })
            | Self::DualBubble(DualBubble { start, .. })
            | Self::MoveToCell(MoveToCell { start, .. })
            | Self::RangeToRange(RangeToRange { start, .. }) => *start,
        }
    }

    /// The state the transition ends at.
    #[must_use]
    pub fn end(&self) -> SelectionState {
        match self {
            Self::AppearAlpha(t) => appear_ends(t.base, t.is_reversed).1,
            Self::AppearBubble(t) => appear_ends(t.base, t.is_reversed).1,
            Self::DualAlpha(DualAlpha { end, .. })
            | Self::DualBubble(DualBubble { end, .. })
            | Self::MoveToCell(MoveToCell { end, .. })
            | Self::RangeToRange(RangeToRange { end, .. }) => *end,
        }
    }

    /// Returns `true` if the selection, as currently drawn, covers `rect`.
    ///
    /// A fading selection covers the rect only while it is at least half
    /// opaque. Touching edges do not count.
    #[must_use]
    pub fn overlays_rect(&self, rect: Rect) -> bool {
        let state_overlays = |state: &SelectionState, alpha: f64| {
            alpha >= VISIBLE_ALPHA
                && state
                    .shape_info()
                    .is_some_and(|info| info.overlays_rect(rect))
        };

        match self {
            Self::AppearAlpha(t) => state_overlays(&t.base, t.alpha),
            Self::AppearBubble(t) => overlaps(t.bounds, rect),
            Self::DualAlpha(t) => {
                state_overlays(&t.start, t.start_alpha) || state_overlays(&t.end, t.end_alpha)
            }
            Self::DualBubble(t) => overlaps(t.start_bounds, rect) || overlaps(t.end_bounds, rect),
            Self::MoveToCell(MoveToCell { shape_info, .. })
            | Self::RangeToRange(RangeToRange { shape_info, .. }) => shape_info.overlays_rect(rect),
        }
    }

    /// Returns `true` if the selection, as currently drawn, covers `cell`.
    ///
    /// Decoration layers use this to pick a contrasting color for the cell's
    /// content while the selection moves across it.
    #[must_use]
    pub fn overlays_cell<M: CellMeasure + ?Sized>(&self, cell: Cell, measure: &M) -> bool {
        self.overlays_rect(measure.cell_rect(cell))
    }
}

fn appear_ends(base: SelectionState, is_reversed: bool) -> (SelectionState, SelectionState) {
    if is_reversed {
        (base, SelectionState::None)
    } else {
        (SelectionState::None, base)
    }
}

/// Bounds of a cell scaled about its center by `fraction`.
pub(crate) fn bubble_bounds(state: &SelectionState, fraction: f64) -> Rect {
    let Some(info) = state.shape_info() else {
        return Rect::ZERO;
    };

    let size = Size::new(info.cell_width, info.cell_height);
    let center = Point::new(
        info.start_left + size.width * 0.5,
        info.start_top + size.height * 0.5,
    );

    Rect::from_center_size(center, size * fraction)
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
