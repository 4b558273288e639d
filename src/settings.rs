// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual constants that stay stable across runs.
//! User-editable values (dpi, font size, ...) are persisted through
//! `config.rs`; colors belong in `theme.rs`.

// ============================================================================
// GLYPH EDITOR SETTINGS
// ============================================================================
/// Lower zoom bound for the glyph editor (exclusive)
const EDITOR_MIN_ZOOM: f64 = 0.5;

/// Upper zoom bound for the glyph editor (exclusive)
const EDITOR_MAX_ZOOM: f64 = 10.0;

// ============================================================================
// TEXT PREVIEW SETTINGS
// ============================================================================
/// Lower zoom bound for the text preview (exclusive)
const PREVIEW_MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound for the text preview (exclusive)
const PREVIEW_MAX_ZOOM: f64 = 2.0;

/// Zoom step applied when the preview is created, so a whole sheet fits
const PREVIEW_INITIAL_ZOOM_STEP: f64 = 0.3;

// ============================================================================
// WHEEL INPUT SETTINGS
// ============================================================================
// scale *= WHEEL_BASE ^ (delta / WHEEL_UNITS_PER_STEP)
// One notch of a classic mouse wheel reports WHEEL_NOTCH units.

const WHEEL_BASE: f64 = 1.2;
const WHEEL_UNITS_PER_STEP: f64 = 240.0;
const WHEEL_NOTCH: f64 = 120.0;

// ============================================================================
// PAGE SETTINGS (millimeters)
// ============================================================================
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const PAGE_MARGIN_MM: f64 = 5.0;
const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// TYPOGRAPHY DEFAULTS
// ============================================================================
const DEFAULT_DPI: u32 = 300;

/// Glyph height in millimeters
const DEFAULT_FONT_SIZE: f64 = 6.0;

/// Extra advance between glyphs in device units (negative = overlap)
const DEFAULT_LETTER_SPACING: f64 = -10.0;

const DEFAULT_FONT_PATH: &str = "DefaultFont.toml";

// ============================================================================
// OVERLAY SETTINGS
// ============================================================================
/// Diameter of the in/out anchor marks in pixels
const ANCHOR_MARK_DIAMETER: f64 = 6.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Glyph editor zoom bounds
pub mod editor {
    pub const MIN_ZOOM: f64 = super::EDITOR_MIN_ZOOM;
    pub const MAX_ZOOM: f64 = super::EDITOR_MAX_ZOOM;
}

/// Text preview zoom bounds
pub mod preview {
    pub const MIN_ZOOM: f64 = super::PREVIEW_MIN_ZOOM;
    pub const MAX_ZOOM: f64 = super::PREVIEW_MAX_ZOOM;
    pub const INITIAL_ZOOM_STEP: f64 = super::PREVIEW_INITIAL_ZOOM_STEP;
}

/// Mouse wheel to zoom conversion
pub mod input {
    pub const WHEEL_BASE: f64 = super::WHEEL_BASE;
    pub const WHEEL_UNITS_PER_STEP: f64 = super::WHEEL_UNITS_PER_STEP;
    pub const WHEEL_NOTCH: f64 = super::WHEEL_NOTCH;
}

/// Physical page dimensions
pub mod page {
    pub const WIDTH_MM: f64 = super::PAGE_WIDTH_MM;
    pub const HEIGHT_MM: f64 = super::PAGE_HEIGHT_MM;
    pub const MARGIN_MM: f64 = super::PAGE_MARGIN_MM;
    pub const MM_PER_INCH: f64 = super::MM_PER_INCH;
}

/// Defaults for the persisted typography settings
pub mod typography {
    pub const DPI: u32 = super::DEFAULT_DPI;
    pub const FONT_SIZE: f64 = super::DEFAULT_FONT_SIZE;
    pub const LETTER_SPACING: f64 = super::DEFAULT_LETTER_SPACING;
    pub const FONT_PATH: &str = super::DEFAULT_FONT_PATH;
}

/// Editor overlay marks
pub mod overlay {
    pub const ANCHOR_MARK_DIAMETER: f64 = super::ANCHOR_MARK_DIAMETER;
}
