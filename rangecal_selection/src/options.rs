// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{Brush, Color};

/// How a single cell appears and disappears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellAnimationType {
    /// The cell fades in or out.
    #[default]
    Alpha,
    /// The cell grows from or shrinks to its center.
    Bubble,
}

impl CellAnimationType {
    /// Returns the animation type with the given ordinal (`0` for
    /// [`Alpha`](Self::Alpha), `1` for [`Bubble`](Self::Bubble)).
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Alpha),
            1 => Some(Self::Bubble),
            _ => None,
        }
    }

    /// Returns the ordinal of the animation type.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Alpha => 0,
            Self::Bubble => 1,
        }
    }
}

/// Options for building and drawing selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionRenderOptions {
    /// Animation used when a single cell appears, disappears or is replaced
    /// by a cell on another row and column.
    pub cell_animation_type: CellAnimationType,
    /// Paint for the selection.
    ///
    /// This is a [`peniko::Brush`], so backends can map it directly onto
    /// their native paint.
    pub fill: Brush,
    /// Round radius of selection corners. `None` uses the radius of the
    /// cell measurement.
    pub round_radius: Option<f64>,
}

impl Default for SelectionRenderOptions {
    fn default() -> Self {
        Self {
            cell_animation_type: CellAnimationType::Alpha,
            fill: Brush::Solid(Color::BLACK),
            round_radius: None,
        }
    }
}
