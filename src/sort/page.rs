// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! A4 sheet geometry in device units

use kurbo::Rect;

use crate::settings::page;

/// Sheet and margin rects for one resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Dots per millimeter
    pub dpmm: f64,
    /// Whole sheet, origin at (0, 0)
    pub sheet: Rect,
    /// Printable area inside the margins
    pub margins: Rect,
}

impl PageGeometry {
    pub fn new(dpi: u32) -> Self {
        let dpmm = f64::from(dpi) / page::MM_PER_INCH;
        let margin = page::MARGIN_MM * dpmm;
        let sheet = Rect::new(0.0, 0.0, page::WIDTH_MM * dpmm, page::HEIGHT_MM * dpmm);
        let margins = Rect::new(margin, margin, sheet.x1 - margin, sheet.y1 - margin);
        Self {
            dpmm,
            sheet,
            margins,
        }
    }

    /// Convert millimeters to device units
    pub fn mm(&self, millimeters: f64) -> f64 {
        millimeters * self.dpmm
    }
}
