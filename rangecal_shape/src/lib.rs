// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rangecal Shape: outline geometry for selected calendar cell ranges.
//!
//! A selected range is drawn as one continuous outline even when it wraps
//! across several rows of the grid. This crate turns a measured range into
//! that outline:
//!
//! - [`SelectionShapeInfo`]: the measured pixel data of a range (start and end
//!   cell edges, row extents, cell size and round radius). Compared by value.
//! - [`SelectionShape`]: builds the outline once and reuses it while the same
//!   info is passed in, so per-frame updates that only animate opacity or
//!   color cost a comparison.
//! - [`composite_rects`]: the same area expressed as up to three rounded
//!   rectangles with per-corner radii, for back-ends that prefer primitives.
//!
//! A single-row range is a rounded rectangle. A multi-row range becomes a
//! closed polygon walking the boundary of the first row, the full rows in
//! between and the last row, with every corner filleted by the round radius.
//! When two rows do not overlap horizontally they are emitted as two
//! separate pieces.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use rangecal_grid::{CellRange, UniformGridMeasure};
//! use rangecal_shape::{SelectionShape, SelectionShapeInfo, ShapeFlags, ShapeOrigin};
//!
//! let measure = UniformGridMeasure::new(280.0, 40.0, 20.0);
//!
//! // The whole second and third rows.
//! let info = SelectionShapeInfo::from_range(CellRange::from_indices(7, 20), &measure);
//! assert_eq!(info.bounds(), Rect::new(0.0, 20.0, 280.0, 60.0));
//!
//! let mut shape = SelectionShape::new();
//! shape.update(&info, ShapeOrigin::Local, ShapeFlags::empty());
//! assert_eq!(shape.bounds(), Rect::new(0.0, 0.0, 280.0, 40.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod composite;
mod info;
mod shape;

pub use composite::{Corners, composite_rects};
pub use info::SelectionShapeInfo;
pub use shape::{SelectionShape, ShapeFlags, ShapeGeometry, ShapeOrigin};
