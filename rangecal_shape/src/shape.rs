// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached outline of a selected range.

use kurbo::{BezPath, Point, Rect, RoundedRect, Vec2};
use smallvec::SmallVec;

use crate::SelectionShapeInfo;

/// Distance of cubic control points from the corner, as a fraction of the
/// radius, for a quarter-circle approximation.
const CIRCLE_CONTROL: f64 = 0.552_284_749_8;

/// Coordinate space of the geometry produced by [`SelectionShape`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeOrigin {
    /// Coordinates in the measurement provider's space.
    #[default]
    Grid,
    /// Coordinates relative to the top-left corner of the shape's bounds.
    Local,
}

bitflags::bitflags! {
    /// Options for [`SelectionShape::update`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShapeFlags: u8 {
        /// Build a path even when a rounded rectangle would describe the shape.
        const FORCE_PATH = 1 << 0;
        /// Use square corners regardless of the round radius.
        const IGNORE_ROUNDING = 1 << 1;
    }
}

/// The drawable form of a [`SelectionShape`].
#[derive(Clone, Copy, Debug)]
pub enum ShapeGeometry<'a> {
    /// The shape is a single rounded rectangle.
    RoundRect(RoundedRect),
    /// The shape is a closed path, possibly made of several subpaths.
    Path(&'a BezPath),
}

/// Builds and caches the outline of a selected range.
///
/// A shape is rebuilt only when it is updated with a different
/// [`SelectionShapeInfo`], origin or rounding mode. The path buffer is reused
/// between rebuilds, so animating a shape does not allocate once the buffer
/// has grown to fit.
///
/// ```rust
/// use rangecal_grid::{CellRange, UniformGridMeasure};
/// use rangecal_shape::{SelectionShape, SelectionShapeInfo, ShapeFlags, ShapeGeometry, ShapeOrigin};
///
/// let measure = UniformGridMeasure::new(280.0, 30.0, 20.0).with_round_radius(4.0);
/// let info = SelectionShapeInfo::from_range(CellRange::from_indices(3, 9), &measure);
///
/// let mut shape = SelectionShape::new();
/// assert!(shape.update(&info, ShapeOrigin::Grid, ShapeFlags::empty()));
/// assert!(matches!(shape.geometry(), ShapeGeometry::Path(_)));
///
/// // Nothing changed: the cached outline is kept.
/// assert!(!shape.update(&info, ShapeOrigin::Grid, ShapeFlags::empty()));
/// assert_eq!(shape.revision(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionShape {
    key: Option<CacheKey>,
    bounds: Rect,
    upper_rect: Rect,
    lower_rect: Option<Rect>,
    radius: f64,
    path: BezPath,
    has_path: bool,
    revision: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CacheKey {
    info: SelectionShapeInfo,
    origin: ShapeOrigin,
    ignore_rounding: bool,
}

impl SelectionShape {
    /// Creates an empty shape. Call [`SelectionShape::update`] before reading geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the shape for `info` unless it is already up to date.
    ///
    /// Returns `true` if the geometry was rebuilt.
    pub fn update(
        &mut self,
        info: &SelectionShapeInfo,
        origin: ShapeOrigin,
        flags: ShapeFlags,
    ) -> bool {
        let key = CacheKey {
            info: *info,
            origin,
            ignore_rounding: flags.contains(ShapeFlags::IGNORE_ROUNDING),
        };
        let force_path = flags.contains(ShapeFlags::FORCE_PATH);

        if self.key == Some(key) && (self.has_path || !force_path) {
            #[cfg(feature = "tracing")]
            tracing::trace!(range = ?info.range, revision = self.revision, "selection shape cache hit");

            return false;
        }

        self.rebuild(&key, force_path);
        self.key = Some(key);
        self.revision = self.revision.wrapping_add(1);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            range = ?info.range,
            has_path = self.has_path,
            revision = self.revision,
            "selection shape rebuilt"
        );

        true
    }

    fn rebuild(&mut self, key: &CacheKey, force_path: bool) {
        let info = &key.info;
        let ch = info.cell_height;

        let radius = if key.ignore_rounding {
            0.0
        } else {
            info.round_radius.max(0.0).min(ch * 0.5)
        };
        self.radius = radius;

        let bounds = info.bounds();
        let offset = match key.origin {
            ShapeOrigin::Grid => Vec2::ZERO,
            ShapeOrigin::Local => bounds.origin().to_vec2(),
        };
        self.bounds = bounds - offset;

        self.path.truncate(0);
        self.has_path = false;

        let grid_y_diff = info.range.grid_y_diff();

        if grid_y_diff == 0 {
            self.upper_rect = self.bounds;
            self.lower_rect = None;

            if force_path {
                push_polygon(&mut self.path, &rect_vertices(self.bounds), radius);
                self.has_path = true;
            }

            return;
        }

        let upper = Rect::new(
            info.start_left,
            info.start_top,
            info.last_cell_on_row_right,
            info.start_top + ch,
        ) - offset;
        let lower = Rect::new(
            info.first_cell_on_row_left,
            info.end_top,
            info.end_right,
            info.end_top + ch,
        ) - offset;

        self.upper_rect = upper;
        self.lower_rect = Some(lower);
        self.has_path = true;

        // Two rows whose occupied spans do not overlap horizontally: the rows
        // are drawn as separate pieces.
        if grid_y_diff == 1 && upper.x0 + radius >= lower.x1 - radius {
            push_polygon(&mut self.path, &rect_vertices(upper), radius);
            push_polygon(&mut self.path, &rect_vertices(lower), radius);

            return;
        }

        let mut vertices: SmallVec<[Point; 8]> = SmallVec::new();

        vertices.push(Point::new(upper.x0, upper.y0));
        vertices.push(Point::new(upper.x1, upper.y0));

        if lower.x1 != upper.x1 {
            vertices.push(Point::new(upper.x1, lower.y0));
            vertices.push(Point::new(lower.x1, lower.y0));
        }

        vertices.push(Point::new(lower.x1, lower.y1));
        vertices.push(Point::new(lower.x0, lower.y1));

        if lower.x0 != upper.x0 {
            vertices.push(Point::new(lower.x0, upper.y1));
            vertices.push(Point::new(upper.x0, upper.y1));
        }

        push_polygon(&mut self.path, &vertices, radius);
    }

    /// Bounding box of the shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The part of the shape on the first row of the range.
    ///
    /// For a single-row range this is the whole shape.
    #[must_use]
    pub fn upper_rect(&self) -> Rect {
        self.upper_rect
    }

    /// The part of the shape on the last row of the range, if it spans more
    /// than one row.
    #[must_use]
    pub fn lower_rect(&self) -> Option<Rect> {
        self.lower_rect
    }

    /// The round radius the shape was built with.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The outline path, if one was built.
    #[must_use]
    pub fn path(&self) -> Option<&BezPath> {
        self.has_path.then_some(&self.path)
    }

    /// The geometry to draw.
    #[must_use]
    pub fn geometry(&self) -> ShapeGeometry<'_> {
        if self.has_path {
            ShapeGeometry::Path(&self.path)
        } else {
            ShapeGeometry::RoundRect(RoundedRect::from_rect(self.bounds, self.radius))
        }
    }

    /// Number of times the geometry has been rebuilt.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

fn rect_vertices(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

/// Appends a closed polygon to `path`, replacing every corner with a circular
/// arc of `radius`.
///
/// The radius of a corner is limited to half of each adjacent edge.
fn push_polygon(path: &mut BezPath, vertices: &[Point], radius: f64) {
    let n = vertices.len();
    if n < 3 {
        return;
    }

    if radius <= 0.0 {
        path.move_to(vertices[0]);
        for &v in &vertices[1..] {
            path.line_to(v);
        }
        path.close_path();

        return;
    }

    let corner = |i: usize| {
        let c = vertices[i];
        let prev = vertices[(i + n - 1) % n];
        let next = vertices[(i + 1) % n];

        let to_prev = prev - c;
        let to_next = next - c;
        let len_prev = to_prev.hypot();
        let len_next = to_next.hypot();

        let r = radius.min(len_prev * 0.5).min(len_next * 0.5);
        let d_in: Vec2 = to_prev / len_prev;
        let d_out: Vec2 = to_next / len_next;

        Fillet {
            from: c + d_in * r,
            ctrl1: c + d_in * (r * (1.0 - CIRCLE_CONTROL)),
            ctrl2: c + d_out * (r * (1.0 - CIRCLE_CONTROL)),
            to: c + d_out * r,
        }
    };

    let first = corner(0);
    path.move_to(first.to);

    for i in 1..n {
        let fillet = corner(i);
        path.line_to(fillet.from);
        path.curve_to(fillet.ctrl1, fillet.ctrl2, fillet.to);
    }

    path.line_to(first.from);
    path.curve_to(first.ctrl1, first.ctrl2, first.to);
    path.close_path();
}

struct Fillet {
    from: Point,
    ctrl1: Point,
    ctrl2: Point,
    to: Point,
}
