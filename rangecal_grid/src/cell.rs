// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Number of columns in the calendar grid (one per weekday).
pub const COLUMN_COUNT: i32 = 7;

/// Number of rows in the calendar grid.
pub const ROW_COUNT: i32 = 6;

/// Total number of cells in the calendar grid.
pub const CELL_COUNT: i32 = COLUMN_COUNT * ROW_COUNT;

/// A single cell of the calendar grid, addressed by its linear index.
///
/// Defined cells have an index in `0..=41`; the grid is laid out row by row,
/// seven cells per row. [`Cell::UNDEFINED`] (index `-1`) stands for "no cell".
///
/// Constructors do not validate the index: keeping it in range is the
/// caller's responsibility.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(i32);

impl Cell {
    /// The "no cell" sentinel.
    pub const UNDEFINED: Self = Self(-1);

    /// Creates a cell from its linear index.
    #[inline]
    #[must_use]
    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    /// Creates a cell from its column (`x`) and row (`y`).
    #[inline]
    #[must_use]
    pub const fn from_grid(x: i32, y: i32) -> Self {
        Self(y * COLUMN_COUNT + x)
    }

    /// Returns the linear index of the cell.
    #[inline]
    #[must_use]
    pub const fn index(self) -> i32 {
        self.0
    }

    /// Returns the column of the cell, `0..=6`.
    #[inline]
    #[must_use]
    pub const fn grid_x(self) -> i32 {
        self.0 % COLUMN_COUNT
    }

    /// Returns the row of the cell, `0..=5`.
    #[inline]
    #[must_use]
    pub const fn grid_y(self) -> i32 {
        self.0 / COLUMN_COUNT
    }

    /// Returns `true` unless this is [`Cell::UNDEFINED`] (or another negative index).
    #[inline]
    #[must_use]
    pub const fn is_defined(self) -> bool {
        self.0 >= 0
    }

    /// Returns `true` for [`Cell::UNDEFINED`] (or another negative index).
    #[inline]
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        self.0 < 0
    }

    /// Returns `true` if both cells are in the same column.
    #[inline]
    #[must_use]
    pub const fn same_x(self, other: Self) -> bool {
        self.grid_x() == other.grid_x()
    }

    /// Returns `true` if both cells are in the same row.
    #[inline]
    #[must_use]
    pub const fn same_y(self, other: Self) -> bool {
        self.grid_y() == other.grid_y()
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// An inclusive span of cells `[start, end]` by linear index.
///
/// A range is *valid* iff `start <= end`. [`CellRange::INVALID`] is the
/// dedicated "no range" value and is distinct from any single-cell range.
///
/// The range can be packed into a `u32` (start in the low half, end in the
/// high half) with [`CellRange::bits`] for compact storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CellRange {
    start: Cell,
    end: Cell,
}

impl CellRange {
    /// The "no range" value: `start = 0`, `end = -1`.
    pub const INVALID: Self = Self {
        start: Cell::new(0),
        end: Cell::UNDEFINED,
    };

    /// The range covering the whole grid.
    pub const ALL: Self = Self {
        start: Cell::new(0),
        end: Cell::new(CELL_COUNT - 1),
    };

    /// Creates a range between two cells. No normalization is applied.
    #[inline]
    #[must_use]
    pub const fn new(start: Cell, end: Cell) -> Self {
        Self { start, end }
    }

    /// Creates a range from two linear indices. No normalization is applied.
    #[inline]
    #[must_use]
    pub const fn from_indices(start: i32, end: i32) -> Self {
        Self::new(Cell::new(start), Cell::new(end))
    }

    /// Creates a range that contains only `cell`.
    #[inline]
    #[must_use]
    pub const fn single(cell: Cell) -> Self {
        Self::new(cell, cell)
    }

    /// Creates the range covering row `index` of the grid: `[7 * index, 7 * index + 6]`.
    #[inline]
    #[must_use]
    pub const fn week(index: i32) -> Self {
        let start = index * COLUMN_COUNT;

        Self::from_indices(start, start + COLUMN_COUNT - 1)
    }

    /// Unpacks a range previously packed with [`CellRange::bits`].
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Each half of the packed value holds exactly one 16-bit index"
        )]
        let (start, end) = ((bits & 0xFFFF) as u16 as i16, (bits >> 16) as u16 as i16);

        Self::from_indices(start as i32, end as i32)
    }

    /// Packs the range into a `u32`: start in the low 16 bits, end in the high 16 bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Cell indices are in -1..=41 and always fit in 16 bits"
        )]
        let (start, end) = (self.start.0 as i16 as u16, self.end.0 as i16 as u16);

        (start as u32) | ((end as u32) << 16)
    }

    /// Returns the first cell of the range.
    #[inline]
    #[must_use]
    pub const fn start(self) -> Cell {
        self.start
    }

    /// Returns the last cell of the range (inclusive).
    #[inline]
    #[must_use]
    pub const fn end(self) -> Cell {
        self.end
    }

    /// Returns `true` iff `start <= end`.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.start.0 <= self.end.0
    }

    /// Returns `true` if the range consists of exactly one cell.
    #[inline]
    #[must_use]
    pub const fn is_single_cell(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Returns `true` if `cell` lies inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.start.0 <= cell.0 && cell.0 <= self.end.0
    }

    /// Returns `true` if the two ranges share at least one cell.
    #[inline]
    #[must_use]
    pub const fn has_intersection_with(self, other: Self) -> bool {
        other.start.0 <= self.end.0 && self.start.0 <= other.end.0
    }

    /// Returns the common part of two ranges, or [`CellRange::INVALID`] if they
    /// do not overlap.
    #[must_use]
    pub fn intersection_with(self, other: Self) -> Self {
        if !self.has_intersection_with(other) {
            return Self::INVALID;
        }

        Self::from_indices(
            self.start.0.max(other.start.0),
            self.end.0.min(other.end.0),
        )
    }

    /// Returns the range with its bounds swapped if needed so that `start <= end`.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.start.0 <= self.end.0 {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }

    /// Returns the number of grid rows the range spans minus one.
    ///
    /// `0` means the range lies on a single row.
    #[inline]
    #[must_use]
    pub const fn grid_y_diff(self) -> i32 {
        self.end.grid_y() - self.start.grid_y()
    }
}

impl fmt::Debug for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellRange({}..={})", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_position() {
        let cell = Cell::new(23);
        assert_eq!(cell.grid_x(), 2);
        assert_eq!(cell.grid_y(), 3);
        assert_eq!(Cell::from_grid(2, 3), cell);

        assert!(Cell::new(1).same_y(Cell::new(6)));
        assert!(Cell::new(1).same_x(Cell::new(8)));
        assert!(!Cell::new(1).same_y(Cell::new(7)));
        assert!(Cell::UNDEFINED.is_undefined());
        assert!(Cell::new(0).is_defined());
    }

    #[test]
    fn invalid_range() {
        let range = CellRange::INVALID;
        assert_eq!(range.start().index(), 0);
        assert_eq!(range.end().index(), -1);
        assert!(!range.is_valid());
        assert_ne!(range, CellRange::single(Cell::new(0)));
    }

    #[test]
    fn validity_matches_index_order() {
        for start in 0..CELL_COUNT {
            for end in 0..CELL_COUNT {
                let range = CellRange::from_indices(start, end);
                assert_eq!(range.is_valid(), start <= end, "{range:?}");
            }
        }
    }

    #[test]
    fn all_covers_grid() {
        assert_eq!(CellRange::ALL.start().index(), 0);
        assert_eq!(CellRange::ALL.end().index(), CELL_COUNT - 1);
    }

    #[test]
    fn week_ranges() {
        for n in 0..ROW_COUNT {
            assert_eq!(
                CellRange::week(n),
                CellRange::from_indices(7 * n, 7 * n + 6),
                "week {n}"
            );
        }
    }

    #[test]
    fn packing_keeps_both_halves() {
        let range = CellRange::from_indices(8, 25);
        assert_eq!(range.bits(), 8 | (25 << 16));
        assert_eq!(CellRange::from_bits(range.bits()), range);

        assert_eq!(CellRange::INVALID.bits(), 0xFFFF_0000);
        assert_eq!(CellRange::from_bits(0xFFFF_0000), CellRange::INVALID);
    }

    #[test]
    fn has_intersection() {
        let check = |a: (i32, i32), b: (i32, i32), expected: bool| {
            let actual = CellRange::from_indices(a.0, a.1)
                .has_intersection_with(CellRange::from_indices(b.0, b.1));
            assert_eq!(actual, expected, "{a:?} & {b:?}");
        };

        check((1, 2), (1, 1), true);
        check((1, 1), (1, 2), true);
        check((1, 5), (2, 4), true);
        check((1, 3), (4, 5), false);
        check((1, 1), (1, 1), true);
        check((1, 3), (3, 5), true);
    }

    #[test]
    fn intersection() {
        let check = |a: (i32, i32), b: (i32, i32), expected: CellRange| {
            let actual = CellRange::from_indices(a.0, a.1)
                .intersection_with(CellRange::from_indices(b.0, b.1));
            assert_eq!(actual, expected, "{a:?} & {b:?}");
        };

        check((1, 2), (1, 1), CellRange::from_indices(1, 1));
        check((1, 5), (2, 4), CellRange::from_indices(2, 4));
        check((1, 3), (4, 5), CellRange::INVALID);
        check((2, 5), (2, 5), CellRange::from_indices(2, 5));
        check((1, 3), (3, 5), CellRange::from_indices(3, 3));
    }

    #[test]
    fn contains_and_normalize() {
        let range = CellRange::from_indices(3, 1).normalize();
        assert_eq!(range, CellRange::from_indices(1, 3));
        assert!(range.contains(Cell::new(2)));
        assert!(!range.contains(Cell::new(4)));

        assert_eq!(
            CellRange::from_indices(2, 2).normalize(),
            CellRange::from_indices(2, 2)
        );
    }

    #[test]
    fn grid_y_diff_counts_rows() {
        assert_eq!(CellRange::from_indices(1, 6).grid_y_diff(), 0);
        assert_eq!(CellRange::from_indices(6, 7).grid_y_diff(), 1);
        assert_eq!(CellRange::from_indices(0, 41).grid_y_diff(), 5);
    }
}
