// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rangecal Grid: cell addressing and cell measurement for a calendar grid.
//!
//! A month view is a fixed grid of 6 rows by 7 columns. This crate provides:
//! - [`Cell`]: a grid square addressed by its linear index `0..=41`.
//! - [`CellRange`]: an inclusive span of cells, with intersection, containment
//!   and normalization helpers.
//! - [`CellMeasure`]: the seam through which selection geometry asks the
//!   hosting view where a cell is in pixels.
//! - [`UniformGridMeasure`]: a ready-made [`CellMeasure`] for evenly split rows.
//!
//! It does **not** know anything about dates. Mapping a date to a cell is the
//! job of a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use rangecal_grid::{Cell, CellRange};
//!
//! let range = CellRange::new(Cell::new(5), Cell::new(9));
//! assert!(range.is_valid());
//! assert_eq!(range.grid_y_diff(), 1);
//!
//! // Raw input from a drag gesture may come in reverse order.
//! let dragged = CellRange::from_indices(12, 3).normalize();
//! assert_eq!(dragged, CellRange::from_indices(3, 12));
//!
//! assert_eq!(range.intersection_with(dragged), CellRange::from_indices(5, 9));
//! assert_eq!(CellRange::week(1), CellRange::from_indices(7, 13));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cell;
mod measure;

pub use cell::{CELL_COUNT, COLUMN_COUNT, Cell, CellRange, ROW_COUNT};
pub use measure::{CellMeasure, UniformGridMeasure};
