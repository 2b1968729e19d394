// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell measurement: mapping cells to pixel geometry.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::cell::{COLUMN_COUNT, Cell, ROW_COUNT};

/// Supplies pixel geometry for the cells of a calendar grid.
///
/// Selection geometry is computed purely in terms of this trait, so the
/// layout of the hosting view (padding, column spacing, orientation) stays
/// outside the selection code.
///
/// Every method that takes a [`Cell`] expects a defined cell (`0..=41`);
/// passing anything else is a caller bug.
pub trait CellMeasure {
    /// Width of a cell, in pixels.
    fn cell_width(&self) -> f64;

    /// Height of a cell, in pixels.
    fn cell_height(&self) -> f64;

    /// Round radius of a cell, in pixels.
    fn round_radius(&self) -> f64;

    /// X coordinate of the left edge of `cell`.
    fn cell_left(&self, cell: Cell) -> f64;

    /// Y coordinate of the top edge of `cell`.
    fn cell_top(&self, cell: Cell) -> f64;

    /// 1-D position of `cell` along the row-flow axis.
    ///
    /// The grid is treated as a single ribbon: the distance of a cell is
    /// greater than the distance of every cell with a lower index. The exact
    /// scale is up to the implementation.
    fn cell_distance(&self, cell: Cell) -> f64;

    /// Inverse of [`CellMeasure::cell_distance`].
    ///
    /// Returns the cell nearest to `distance` together with the point
    /// (x on the row, top of the row) the distance maps to. For any defined
    /// cell, `cell_and_point_by_distance(cell_distance(cell))` must return
    /// `cell` and its top-left corner.
    fn cell_and_point_by_distance(&self, distance: f64) -> (Cell, Point);

    /// Returns the cell under `point`, or `None` if the point is outside the grid.
    fn cell_at(&self, point: Point) -> Option<Cell>;

    /// X coordinate of the right edge of `cell`.
    fn cell_right(&self, cell: Cell) -> f64 {
        self.cell_left(cell) + self.cell_width()
    }

    /// Y coordinate of the bottom edge of `cell`.
    fn cell_bottom(&self, cell: Cell) -> f64 {
        self.cell_top(cell) + self.cell_height()
    }

    /// Bounding rectangle of `cell`.
    fn cell_rect(&self, cell: Cell) -> Rect {
        let left = self.cell_left(cell);
        let top = self.cell_top(cell);

        Rect::new(
            left,
            top,
            left + self.cell_width(),
            top + self.cell_height(),
        )
    }
}

impl<M: CellMeasure + ?Sized> CellMeasure for &M {
    fn cell_width(&self) -> f64 {
        (**self).cell_width()
    }

    fn cell_height(&self) -> f64 {
        (**self).cell_height()
    }

    fn round_radius(&self) -> f64 {
        (**self).round_radius()
    }

    fn cell_left(&self, cell: Cell) -> f64 {
        (**self).cell_left(cell)
    }

    fn cell_top(&self, cell: Cell) -> f64 {
        (**self).cell_top(cell)
    }

    fn cell_distance(&self, cell: Cell) -> f64 {
        (**self).cell_distance(cell)
    }

    fn cell_and_point_by_distance(&self, distance: f64) -> (Cell, Point) {
        (**self).cell_and_point_by_distance(distance)
    }

    fn cell_at(&self, point: Point) -> Option<Cell> {
        (**self).cell_at(point)
    }
}

/// A [`CellMeasure`] for a grid whose seven columns split the row evenly.
///
/// Each cell is centered horizontally inside its column and rows are stacked
/// without gaps. Coordinates are relative to the top-left corner of the grid.
///
/// ```rust
/// use rangecal_grid::{Cell, CellMeasure, UniformGridMeasure};
///
/// let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
///
/// // Columns are 40px wide; the 30px cell is centered in its column.
/// assert_eq!(measure.cell_left(Cell::new(0)), 5.0);
/// assert_eq!(measure.cell_top(Cell::new(8)), 20.0);
///
/// let distance = measure.cell_distance(Cell::new(9));
/// let (cell, point) = measure.cell_and_point_by_distance(distance);
/// assert_eq!(cell, Cell::new(9));
/// assert_eq!(point.x, measure.cell_left(cell));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGridMeasure {
    /// Width of a whole row (seven columns), in pixels.
    pub row_width: f64,
    /// Width of a cell, in pixels. Expected to be at most `row_width / 7`.
    pub cell_width: f64,
    /// Height of a cell (and of a row), in pixels.
    pub cell_height: f64,
    /// Round radius of a cell, in pixels.
    pub round_radius: f64,
}

impl UniformGridMeasure {
    /// Creates a measure with square cell corners.
    #[must_use]
    pub const fn new(row_width: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            row_width,
            cell_width,
            cell_height,
            round_radius: 0.0,
        }
    }

    /// Returns a copy with the given cell round radius.
    #[must_use]
    pub const fn with_round_radius(mut self, round_radius: f64) -> Self {
        self.round_radius = round_radius;
        self
    }

    /// Width of a single column.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.row_width / f64::from(COLUMN_COUNT)
    }

    /// Height of the whole grid.
    #[must_use]
    pub fn grid_height(&self) -> f64 {
        self.cell_height * f64::from(ROW_COUNT)
    }

    /// Returns the ribbon distance of an arbitrary point on the grid.
    #[must_use]
    pub fn distance_by_point(&self, point: Point) -> f64 {
        (point.y / self.cell_height) * self.row_width + point.x
    }
}

impl CellMeasure for UniformGridMeasure {
    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn cell_height(&self) -> f64 {
        self.cell_height
    }

    fn round_radius(&self) -> f64 {
        self.round_radius
    }

    fn cell_left(&self, cell: Cell) -> f64 {
        self.column_width() * (f64::from(cell.grid_x()) + 0.5) - self.cell_width * 0.5
    }

    fn cell_top(&self, cell: Cell) -> f64 {
        self.cell_height * f64::from(cell.grid_y())
    }

    fn cell_distance(&self, cell: Cell) -> f64 {
        let x = (f64::from(cell.grid_x()) + 0.5) / f64::from(COLUMN_COUNT);

        self.row_width * (x + f64::from(cell.grid_y())) - self.cell_width * 0.5
    }

    fn cell_and_point_by_distance(&self, distance: f64) -> (Cell, Point) {
        let rw = self.row_width;

        // Locate the row and column from the cell center so that a cell's own
        // left edge never rounds down into the previous column or row.
        let center = distance + self.cell_width * 0.5;
        let grid_y = floor_to_i32(center / rw).clamp(0, ROW_COUNT - 1);
        let x_on_row = distance - f64::from(grid_y) * rw;

        let center_on_row = x_on_row + self.cell_width * 0.5;
        let grid_x =
            floor_to_i32(center_on_row * f64::from(COLUMN_COUNT) / rw).clamp(0, COLUMN_COUNT - 1);

        let cell = Cell::from_grid(grid_x, grid_y);

        // Offset from the cell's own left edge, so the distance of a cell maps
        // back onto that edge exactly.
        let x = self.cell_left(cell) + (distance - self.cell_distance(cell));

        (cell, Point::new(x, self.cell_top(cell)))
    }

    fn cell_at(&self, point: Point) -> Option<Cell> {
        let rw = self.row_width;

        if !(0.0..=rw).contains(&point.x) || !(0.0..=self.grid_height()).contains(&point.y) {
            return None;
        }

        let grid_x = floor_to_i32(point.x * f64::from(COLUMN_COUNT) / rw).min(COLUMN_COUNT - 1);
        let grid_y = floor_to_i32(point.y / self.cell_height).min(ROW_COUNT - 1);

        Some(Cell::from_grid(grid_x, grid_y))
    }
}

fn floor_to_i32(value: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Grid coordinates are small; callers clamp the result immediately"
    )]
    {
        value.floor() as i32
    }
}
