// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rangecal Selection: selection states of a calendar grid and the animated
//! transitions between them.
//!
//! A calendar selection is either nothing, a single cell or a range of cells.
//! Whenever it changes, the widget animates from the old selection to the new
//! one. This crate owns that bookkeeping:
//!
//! - [`SelectionState`]: a steady selection with its measured geometry,
//!   built by [`create_state`].
//! - [`SelectionManager`]: keeps the previous and the current state and picks
//!   the [`SelectionTransition`] between them.
//! - [`TransitionController`]: advances a transition to an animation fraction;
//!   [`DefaultTransitionController`] interpolates linearly.
//! - [`SelectionRenderer`]: turns states and transitions into fills on a
//!   [`SelectionBackend`].
//!
//! It does **not** drive the animation clock or apply easing; the hosting
//! widget feeds eased fractions in `0..=1` to the controller once per frame.
//! Cell pixel geometry comes from a [`CellMeasure`](rangecal_grid::CellMeasure).
//!
//! ## Minimal example
//!
//! ```rust
//! use rangecal_grid::{Cell, UniformGridMeasure};
//! use rangecal_selection::{
//!     DefaultTransitionController, SelectionManager, SelectionRenderOptions, SelectionTransition,
//!     TransitionController,
//! };
//!
//! let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
//! let options = SelectionRenderOptions::default();
//!
//! let mut manager = SelectionManager::new();
//! manager.set_state(Cell::new(9), Cell::new(9), &measure);
//! // Same row: the selection slides over.
//! manager.set_state(Cell::new(12), Cell::new(12), &measure);
//!
//! let mut transition = manager.create_transition(&options, &measure)?;
//! assert!(matches!(transition, SelectionTransition::MoveToCell(_)));
//!
//! for frame in 0..=10 {
//!     let fraction = f64::from(frame) / 10.0;
//!     DefaultTransitionController.handle_transition(&mut transition, &measure, fraction);
//! }
//! assert_eq!(transition.end(), *manager.current_state());
//! # Ok::<(), rangecal_selection::TransitionError>(())
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, state changes and chosen transitions
//! are reported as `debug` events and unsupported transitions as `warn`
//! events.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod error;
mod manager;
mod options;
mod render;
mod state;
mod transition;

pub use controller::{DefaultTransitionController, TransitionController};
pub use error::TransitionError;
pub use manager::SelectionManager;
pub use options::{CellAnimationType, SelectionRenderOptions};
pub use render::{SelectionBackend, SelectionRenderer};
pub use state::{SelectionKind, SelectionState, create_state};
pub use transition::{
    AppearAlpha, AppearBubble, DualAlpha, DualBubble, MoveToCell, RangeToRange,
    SelectionTransition,
};
