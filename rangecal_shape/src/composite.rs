// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A range outline drawn as separate rounded rectangles.

use kurbo::{Rect, RoundedRect, RoundedRectRadii};
use smallvec::SmallVec;

use crate::SelectionShapeInfo;

bitflags::bitflags! {
    /// A set of rectangle corners.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        /// Top-left corner.
        const TOP_LEFT = 1 << 0;
        /// Top-right corner.
        const TOP_RIGHT = 1 << 1;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 1 << 2;
        /// Bottom-left corner.
        const BOTTOM_LEFT = 1 << 3;
    }
}

impl Corners {
    /// Radii with `radius` on the corners in the set and `0` elsewhere.
    #[must_use]
    pub fn radii(self, radius: f64) -> RoundedRectRadii {
        let pick = |corner: Self| if self.contains(corner) { radius } else { 0.0 };

        RoundedRectRadii::new(
            pick(Self::TOP_LEFT),
            pick(Self::TOP_RIGHT),
            pick(Self::BOTTOM_RIGHT),
            pick(Self::BOTTOM_LEFT),
        )
    }
}

/// Splits the area of a range into up to three rounded rectangles: the first
/// row, the last row and the full-width rows between them.
///
/// Outer corners are always rounded. A corner at a row joint is rounded only
/// where the neighbouring row does not continue the edge, so that the pieces
/// drawn together read as one outline. A single-row range yields one
/// rectangle rounded on every corner.
#[must_use]
pub fn composite_rects(info: &SelectionShapeInfo, radius: f64) -> SmallVec<[RoundedRect; 3]> {
    let mut rects = SmallVec::new();

    let range = info.range;
    let start_x = range.start().grid_x();
    let end_x = range.end().grid_x();
    let grid_y_diff = range.grid_y_diff();

    let ch = info.cell_height;
    let start_bottom = info.start_top + ch;
    let end_bottom = info.end_top + ch;

    if grid_y_diff == 0 {
        rects.push(RoundedRect::from_rect(
            Rect::new(info.start_left, info.start_top, info.end_right, start_bottom),
            radius,
        ));

        return rects;
    }

    let starts_row = start_x == 0;
    let ends_row = end_x == 6;

    let mut top = Corners::TOP_LEFT | Corners::TOP_RIGHT;
    top.set(Corners::BOTTOM_LEFT, !starts_row);
    top.set(Corners::BOTTOM_RIGHT, grid_y_diff == 1 && !ends_row);

    rects.push(RoundedRect::from_rect(
        Rect::new(
            info.start_left,
            info.start_top,
            info.last_cell_on_row_right,
            start_bottom,
        ),
        top.radii(radius),
    ));

    let mut bottom = Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT;
    bottom.set(Corners::TOP_RIGHT, !ends_row);
    bottom.set(Corners::TOP_LEFT, grid_y_diff == 1 && !starts_row);

    // With no rows in between, the last row reaches up to the bottom of the
    // first, closing any vertical gap the measure leaves between rows.
    let bottom_top = if grid_y_diff == 1 {
        start_bottom
    } else {
        info.end_top
    };

    rects.push(RoundedRect::from_rect(
        Rect::new(
            info.first_cell_on_row_left,
            bottom_top,
            info.end_right,
            end_bottom,
        ),
        bottom.radii(radius),
    ));

    if grid_y_diff > 1 {
        let mut middle = Corners::empty();
        middle.set(Corners::TOP_LEFT, !starts_row);
        middle.set(Corners::BOTTOM_RIGHT, !ends_row);

        rects.push(RoundedRect::from_rect(
            Rect::new(
                info.first_cell_on_row_left,
                start_bottom,
                info.last_cell_on_row_right,
                info.end_top,
            ),
            middle.radii(radius),
        ));
    }

    rects
}

#[cfg(test)]
mod tests {
    use rangecal_grid::CellRange;

    use super::*;

    fn info(range: (i32, i32), start_left: f64, end_right: f64) -> SelectionShapeInfo {
        let range = CellRange::from_indices(range.0, range.1);
        SelectionShapeInfo {
            range,
            start_left,
            start_top: 10.0 * f64::from(range.start().grid_y()),
            end_right,
            end_top: 10.0 * f64::from(range.end().grid_y()),
            first_cell_on_row_left: 0.0,
            last_cell_on_row_right: 70.0,
            cell_width: 10.0,
            cell_height: 10.0,
            round_radius: 2.0,
        }
    }

    #[test]
    fn corner_radii() {
        let radii = (Corners::TOP_LEFT | Corners::BOTTOM_RIGHT).radii(3.0);
        assert_eq!(radii, RoundedRectRadii::new(3.0, 0.0, 3.0, 0.0));
        assert_eq!(Corners::all().radii(1.0), RoundedRectRadii::from_single_radius(1.0));
    }

    #[test]
    fn single_row_is_fully_rounded() {
        let rects = composite_rects(&info((1, 3), 10.0, 40.0), 2.0);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].rect(), Rect::new(10.0, 0.0, 40.0, 10.0));
        assert_eq!(rects[0].radii(), RoundedRectRadii::from_single_radius(2.0));
    }

    #[test]
    fn two_rows_round_inner_joints() {
        let rects = composite_rects(&info((3, 9), 30.0, 30.0), 2.0);
        assert_eq!(rects.len(), 2);

        assert_eq!(rects[0].rect(), Rect::new(30.0, 0.0, 70.0, 10.0));
        assert_eq!(rects[0].radii(), RoundedRectRadii::from_single_radius(2.0));

        assert_eq!(rects[1].rect(), Rect::new(0.0, 10.0, 30.0, 20.0));
        assert_eq!(rects[1].radii(), RoundedRectRadii::from_single_radius(2.0));
    }

    #[test]
    fn edges_that_continue_stay_square() {
        let rects = composite_rects(&info((0, 13), 0.0, 70.0), 2.0);

        assert_eq!(rects[0].radii(), RoundedRectRadii::new(2.0, 2.0, 0.0, 0.0));
        assert_eq!(rects[1].radii(), RoundedRectRadii::new(0.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn middle_rows_get_a_filler() {
        let rects = composite_rects(&info((3, 23), 30.0, 30.0), 2.0);
        assert_eq!(rects.len(), 3);

        assert_eq!(rects[0].radii(), RoundedRectRadii::new(2.0, 2.0, 0.0, 2.0));
        assert_eq!(rects[1].rect(), Rect::new(0.0, 30.0, 30.0, 40.0));
        assert_eq!(rects[1].radii(), RoundedRectRadii::new(0.0, 2.0, 2.0, 2.0));
        assert_eq!(rects[2].rect(), Rect::new(0.0, 10.0, 70.0, 30.0));
        assert_eq!(rects[2].radii(), RoundedRectRadii::new(2.0, 0.0, 2.0, 0.0));
    }
}
