// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate types for the glyph editor.
//!
//! Two spaces meet in the editor and they must never be mixed:
//!
//! - **Viewport space**: widget pixels, origin at the top-left of the
//!   editor widget. Depends on the current zoom and the widget size.
//! - **Normalized space**: fractions of the glyph's rendered box, origin at
//!   the glyph's top-left, `(1, 1)` at its bottom-right. Independent of
//!   zoom and widget size, so stored annotations survive both.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A point in glyph-local normalized space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// Sentinel for a point the user has not placed yet
    pub const UNSET: Self = Self { x: -1.0, y: -1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_set(&self) -> bool {
        *self != Self::UNSET
    }
}

impl Default for NormalizedPoint {
    fn default() -> Self {
        Self::UNSET
    }
}

/// A point in widget pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_kurbo(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for ViewportPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<ViewportPoint> for Point {
    fn from(p: ViewportPoint) -> Self {
        p.to_kurbo()
    }
}

/// A rectangle in normalized space, stored as two corners
///
/// The corners are kept exactly as recorded; `canonical` produces the
/// well-formed version.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl NormalizedRect {
    /// Sentinel for limits that were never defined
    pub const EMPTY: Self = Self {
        x0: -1.0,
        y0: -1.0,
        x1: -1.0,
        y1: -1.0,
    };

    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_corners(top_left: NormalizedPoint, bottom_right: NormalizedPoint) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    pub fn top_left(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x0, self.y0)
    }

    pub fn bottom_right(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x1, self.y1)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn is_well_formed(&self) -> bool {
        self.width() >= 0.0 && self.height() >= 0.0
    }

    /// Reorder the corners per axis so width and height are non-negative
    pub fn canonical(&self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    pub fn to_kurbo(self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }
}

impl Default for NormalizedRect {
    fn default() -> Self {
        Self::EMPTY
    }
}
