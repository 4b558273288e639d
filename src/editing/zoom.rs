// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounded exponential zoom shared by the editor and the preview

use crate::settings::input;

/// Scale multiplier for a wheel delta: `1.2 ^ (delta / 240)`
pub fn wheel_factor(delta: f64) -> f64 {
    input::WHEEL_BASE.powf(delta / input::WHEEL_UNITS_PER_STEP)
}

/// A zoom factor kept strictly inside `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel {
    scale: f64,
    min: f64,
    max: f64,
}

impl ZoomLevel {
    /// `scale` should lie inside the bounds; it is not checked so a view
    /// can start at 1.0 even with unusual bounds.
    pub fn new(scale: f64, min: f64, max: f64) -> Self {
        Self { scale, min, max }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Multiply by `factor` unless the result leaves the open interval.
    ///
    /// Returns whether the scale changed. A rejected update leaves the
    /// scale untouched.
    pub fn apply_factor(&mut self, factor: f64) -> bool {
        let new_scale = self.scale * factor;
        if new_scale < self.max && new_scale > self.min {
            self.scale = new_scale;
            true
        } else {
            false
        }
    }

    /// Apply a mouse wheel delta (120 units per notch)
    pub fn apply_wheel(&mut self, delta: f64) -> bool {
        self.apply_factor(wheel_factor(delta))
    }
}
