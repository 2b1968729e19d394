// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning selections into draw calls.

use kurbo::{BezPath, Rect, RoundedRect};
use peniko::Brush;
use rangecal_shape::{SelectionShape, SelectionShapeInfo, ShapeFlags, ShapeGeometry, ShapeOrigin};

use crate::{SelectionRenderOptions, SelectionState, SelectionTransition};

/// The drawing surface a [`SelectionRenderer`] paints onto.
///
/// Coordinates are in the space of the cell measurement used to build the
/// states. `alpha` multiplies the opacity of `fill`.
pub trait SelectionBackend {
    /// Fills a rounded rectangle.
    fn fill_round_rect(&mut self, rect: RoundedRect, alpha: f64, fill: &Brush);

    /// Fills a closed path whose bounding box is `bounds`.
    fn fill_path(&mut self, path: &BezPath, bounds: Rect, alpha: f64, fill: &Brush);
}

/// Draws steady selections and transitions through a [`SelectionBackend`].
///
/// The renderer keeps two [`SelectionShape`] caches, so a transition that
/// draws two selections at once (such as [`DualAlpha`](crate::DualAlpha))
/// rebuilds neither outline while only opacity changes.
#[derive(Clone, Debug, Default)]
pub struct SelectionRenderer {
    primary: SelectionShape,
    secondary: SelectionShape,
}

impl SelectionRenderer {
    /// Creates a renderer with empty shape caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape cache used for single selections and the fading-in side of
    /// dual transitions.
    #[must_use]
    pub fn primary_shape(&self) -> &SelectionShape {
        &self.primary
    }

    /// The shape cache used for the fading-out side of dual transitions.
    #[must_use]
    pub fn secondary_shape(&self) -> &SelectionShape {
        &self.secondary
    }

    /// Draws a steady selection. Nothing is drawn for [`SelectionState::None`].
    pub fn draw_state<B: SelectionBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        state: &SelectionState,
        options: &SelectionRenderOptions,
    ) {
        if let Some(info) = state.shape_info() {
            draw_shape(&mut self.primary, backend, info, 1.0, options);
        }
    }

    /// Draws a transition as of its last update.
    pub fn draw_transition<B: SelectionBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        transition: &SelectionTransition,
        options: &SelectionRenderOptions,
    ) {
        match transition {
            SelectionTransition::AppearAlpha(t) => {
                if let Some(info) = t.base.shape_info() {
                    draw_shape(&mut self.primary, backend, info, t.alpha, options);
                }
            }
            SelectionTransition::AppearBubble(t) => {
                draw_bubble(backend, &t.base, t.bounds, options);
            }
            SelectionTransition::DualAlpha(t) => {
                if let Some(info) = t.start.shape_info() {
                    draw_shape(&mut self.secondary, backend, info, t.start_alpha, options);
                }
                if let Some(info) = t.end.shape_info() {
                    draw_shape(&mut self.primary, backend, info, t.end_alpha, options);
                }
            }
            SelectionTransition::DualBubble(t) => {
                draw_bubble(backend, &t.start, t.start_bounds, options);
                draw_bubble(backend, &t.end, t.end_bounds, options);
            }
            SelectionTransition::MoveToCell(t) => {
                draw_shape(&mut self.primary, backend, &t.shape_info, 1.0, options);
            }
            SelectionTransition::RangeToRange(t) => {
                draw_shape(&mut self.primary, backend, &t.shape_info, 1.0, options);
            }
        }
    }
}

fn draw_shape<B: SelectionBackend + ?Sized>(
    shape: &mut SelectionShape,
    backend: &mut B,
    info: &SelectionShapeInfo,
    alpha: f64,
    options: &SelectionRenderOptions,
) {
    if alpha <= 0.0 {
        return;
    }

    let mut info = *info;
    if let Some(radius) = options.round_radius {
        info.round_radius = radius;
    }

    shape.update(&info, ShapeOrigin::Grid, ShapeFlags::empty());

    match shape.geometry() {
        ShapeGeometry::RoundRect(rect) => backend.fill_round_rect(rect, alpha, &options.fill),
        ShapeGeometry::Path(path) => backend.fill_path(path, shape.bounds(), alpha, &options.fill),
    }
}

fn draw_bubble<B: SelectionBackend + ?Sized>(
    backend: &mut B,
    state: &SelectionState,
    bounds: Rect,
    options: &SelectionRenderOptions,
) {
    let Some(info) = state.shape_info() else {
        return;
    };
    if bounds.is_zero_area() {
        return;
    }

    let radius = options.round_radius.unwrap_or(info.round_radius);
    backend.fill_round_rect(RoundedRect::from_rect(bounds, radius), 1.0, &options.fill);
}
