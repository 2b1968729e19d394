// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use rangecal_grid::{Cell, CellMeasure, CellRange};

/// Everything needed to build the outline of a selected cell range.
///
/// The record is compared by value: [`SelectionShape`](crate::SelectionShape)
/// skips rebuilding when it is handed an equal record twice.
///
/// Coordinates are in the measurement provider's space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionShapeInfo {
    /// The selected range. Expected to be valid when used to build a shape.
    pub range: CellRange,
    /// Left edge of the range's first cell.
    pub start_left: f64,
    /// Top edge of the range's first cell.
    pub start_top: f64,
    /// Right edge of the range's last cell.
    pub end_right: f64,
    /// Top edge of the range's last cell.
    pub end_top: f64,
    /// Left edge of the leftmost cell of any row.
    pub first_cell_on_row_left: f64,
    /// Right edge of the rightmost cell of any row.
    pub last_cell_on_row_right: f64,
    /// Width of a cell.
    pub cell_width: f64,
    /// Height of a cell.
    pub cell_height: f64,
    /// Round radius of the shape corners.
    pub round_radius: f64,
}

impl Default for SelectionShapeInfo {
    fn default() -> Self {
        Self {
            range: CellRange::INVALID,
            start_left: 0.0,
            start_top: 0.0,
            end_right: 0.0,
            end_top: 0.0,
            first_cell_on_row_left: 0.0,
            last_cell_on_row_right: 0.0,
            cell_width: 0.0,
            cell_height: 0.0,
            round_radius: 0.0,
        }
    }
}

impl SelectionShapeInfo {
    /// Measures `range` with `measure`.
    ///
    /// `range` must be valid and contain only defined cells.
    #[must_use]
    pub fn from_range<M: CellMeasure + ?Sized>(range: CellRange, measure: &M) -> Self {
        debug_assert!(range.is_valid(), "cannot measure {range:?}");

        let start = range.start();
        let end = range.end();

        Self {
            range,
            start_left: measure.cell_left(start),
            start_top: measure.cell_top(start),
            end_right: measure.cell_right(end),
            end_top: measure.cell_top(end),
            first_cell_on_row_left: measure.cell_left(Cell::new(0)),
            last_cell_on_row_right: measure.cell_right(Cell::new(6)),
            cell_width: measure.cell_width(),
            cell_height: measure.cell_height(),
            round_radius: measure.round_radius(),
        }
    }

    /// Copies every field of `other` into `self`.
    pub fn set(&mut self, other: &Self) {
        *self = *other;
    }

    /// Bounding box of the range's area.
    ///
    /// A range that spans more than one row always occupies the full row width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let bottom = self.end_top + self.cell_height;

        if self.range.grid_y_diff() == 0 {
            Rect::new(
                self.start_left,
                self.start_top,
                self.end_right,
                self.start_top + self.cell_height,
            )
        } else {
            Rect::new(
                self.first_cell_on_row_left,
                self.start_top,
                self.last_cell_on_row_right,
                bottom,
            )
        }
    }

    /// Returns `true` if the area covered by the range intersects `rect`.
    ///
    /// Touching edges do not count as an intersection.
    #[must_use]
    pub fn overlays_rect(&self, rect: Rect) -> bool {
        let grid_y_diff = self.range.grid_y_diff();

        let start_bottom = self.start_top + self.cell_height;

        if grid_y_diff == 0 {
            return intersects(
                rect,
                Rect::new(self.start_left, self.start_top, self.end_right, start_bottom),
            );
        }

        let row_left = self.first_cell_on_row_left;
        let row_right = self.last_cell_on_row_right;

        if intersects(
            rect,
            Rect::new(self.start_left, self.start_top, row_right, start_bottom),
        ) {
            return true;
        }

        let end_bottom = self.end_top + self.cell_height;

        if intersects(
            rect,
            Rect::new(row_left, self.end_top, self.end_right, end_bottom),
        ) {
            return true;
        }

        grid_y_diff > 1
            && intersects(
                rect,
                Rect::new(row_left, start_bottom, row_right, self.end_top),
            )
    }
}

fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(range: CellRange, start: (f64, f64), end: (f64, f64)) -> SelectionShapeInfo {
        SelectionShapeInfo {
            range,
            start_left: start.0,
            start_top: start.1,
            end_right: end.0,
            end_top: end.1,
            first_cell_on_row_left: 0.0,
            last_cell_on_row_right: 70.0,
            cell_width: 10.0,
            cell_height: 10.0,
            round_radius: 0.0,
        }
    }

    #[test]
    fn single_row_bounds() {
        let info = info(CellRange::from_indices(1, 2), (10.0, 0.0), (30.0, 0.0));
        assert_eq!(info.bounds(), Rect::new(10.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn multi_row_bounds_span_full_rows() {
        let info = info(CellRange::from_indices(3, 15), (30.0, 0.0), (20.0, 20.0));
        assert_eq!(info.bounds(), Rect::new(0.0, 0.0, 70.0, 30.0));
    }

    #[test]
    fn overlays_rect_checks_each_part() {
        // Cells 3..=15: row 0 from x=30, row 1 full, row 2 up to x=20.
        let info = info(CellRange::from_indices(3, 15), (30.0, 0.0), (20.0, 20.0));

        // Left of the start on the first row: empty.
        assert!(!info.overlays_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        // Inside the first row part.
        assert!(info.overlays_rect(Rect::new(40.0, 0.0, 50.0, 10.0)));
        // Middle row.
        assert!(info.overlays_rect(Rect::new(0.0, 10.0, 10.0, 20.0)));
        // Right of the end on the last row: empty.
        assert!(!info.overlays_rect(Rect::new(50.0, 20.0, 60.0, 30.0)));
        // Inside the last row part.
        assert!(info.overlays_rect(Rect::new(0.0, 20.0, 10.0, 30.0)));
    }

    #[test]
    fn set_copies_everything() {
        let source = info(CellRange::from_indices(3, 15), (30.0, 0.0), (20.0, 20.0));
        let mut target = SelectionShapeInfo::default();
        target.set(&source);
        assert_eq!(target, source);
    }
}
