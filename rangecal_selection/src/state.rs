// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use rangecal_grid::{CellMeasure, CellRange};
use rangecal_shape::SelectionShapeInfo;

/// The kind of a steady selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// Nothing is selected.
    None,
    /// A single cell is selected.
    Cell,
    /// A range of two or more cells is selected.
    Range,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::Cell => "Cell",
            Self::Range => "Range",
        })
    }
}

/// A steady (not animating) selection together with its measured geometry.
///
/// Weeks and whole months are plain ranges: see [`CellRange::week`] and
/// [`CellRange::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SelectionState {
    /// Nothing is selected.
    #[default]
    None,
    /// A single cell; the range of the info starts and ends at that cell.
    Cell(SelectionShapeInfo),
    /// A range of cells spanning one or more rows.
    Range(SelectionShapeInfo),
}

impl SelectionState {
    /// Returns the kind of the state.
    #[must_use]
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::None => SelectionKind::None,
            Self::Cell(_) => SelectionKind::Cell,
            Self::Range(_) => SelectionKind::Range,
        }
    }

    /// Returns the selected range, or [`CellRange::INVALID`] for [`SelectionState::None`].
    #[must_use]
    pub fn range(&self) -> CellRange {
        self.shape_info().map_or(CellRange::INVALID, |info| info.range)
    }

    /// Returns the measured geometry of the selection.
    #[must_use]
    pub fn shape_info(&self) -> Option<&SelectionShapeInfo> {
        match self {
            Self::None => None,
            Self::Cell(info) | Self::Range(info) => Some(info),
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Re-measures the same range with `measure`.
    #[must_use]
    pub fn remeasured<M: CellMeasure + ?Sized>(&self, measure: &M) -> Self {
        match self {
            Self::None => Self::None,
            Self::Cell(info) => Self::Cell(SelectionShapeInfo::from_range(info.range, measure)),
            Self::Range(info) => Self::Range(SelectionShapeInfo::from_range(info.range, measure)),
        }
    }
}

/// Measures `range` and wraps it in the matching state.
///
/// Returns [`SelectionState::Cell`] for a single-cell range, otherwise
/// [`SelectionState::Range`]. The range must already be normalized.
#[must_use]
pub fn create_state<M: CellMeasure + ?Sized>(range: CellRange, measure: &M) -> SelectionState {
    debug_assert!(
        range.start().is_defined() && range.is_valid(),
        "selection range {range:?} is not normalized"
    );

    let info = SelectionShapeInfo::from_range(range, measure);

    if range.is_single_cell() {
        SelectionState::Cell(info)
    } else {
        SelectionState::Range(info)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rangecal_grid::{Cell, UniformGridMeasure};
    use std::string::ToString;

    use super::*;

    #[test]
    fn kind_follows_range_length() {
        let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);

        let cell = create_state(CellRange::single(Cell::new(4)), &measure);
        assert_eq!(cell.kind(), SelectionKind::Cell);
        assert_eq!(cell.range(), CellRange::single(Cell::new(4)));

        let range = create_state(CellRange::from_indices(4, 5), &measure);
        assert_eq!(range.kind(), SelectionKind::Range);
        assert_eq!(range.range(), CellRange::from_indices(4, 5));
    }

    #[test]
    fn none_has_an_invalid_range() {
        let state = SelectionState::None;
        assert!(state.is_none());
        assert!(!state.range().is_valid());
        assert!(state.shape_info().is_none());
    }

    #[test]
    fn remeasure_keeps_the_range() {
        let small = UniformGridMeasure::new(280.0, 30.0, 20.0);
        let large = UniformGridMeasure::new(560.0, 60.0, 40.0);

        let state = create_state(CellRange::from_indices(3, 10), &small);
        let remeasured = state.remeasured(&large);

        assert_eq!(remeasured.range(), state.range());
        assert_eq!(remeasured.kind(), SelectionKind::Range);
        assert_eq!(remeasured.shape_info().unwrap().cell_height, 40.0);
    }

    #[test]
    fn kind_names() {
        assert_eq!(SelectionKind::None.to_string(), "None");
        assert_eq!(SelectionKind::Cell.to_string(), "Cell");
        assert_eq!(SelectionKind::Range.to_string(), "Range");
    }
}
