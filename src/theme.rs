// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_H: Color = Color::from_rgb8(0x80, 0x80, 0x80);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND PANELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_O;
const SECONDARY_UI_TEXT: Color = BASE_I;
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const BUTTON_SELECTED: Color = Color::from_rgb8(0x14, 0x64, 0x14);
const BUTTON_UNSELECTED: Color = BASE_G;

// ============================================================================
// GLYPH EDITOR
// ============================================================================
// Glyphs are drawn ink-on-paper, so the editor canvas stays white even in
// the dark UI.
const EDITOR_BACKGROUND: Color = WHITE;
const EDITOR_BORDER: Color = BLACK;
const EDITOR_GLYPH: Color = BLACK;

// Overlay marks
const IN_POINT: Color = Color::from_rgb8(0x00, 0x80, 0x80); // dark cyan
const OUT_POINT: Color = Color::from_rgb8(0x80, 0x00, 0x80); // dark magenta
const LIMITS: Color = Color::from_rgb8(0x80, 0x80, 0x00); // dark yellow

// ============================================================================
// TEXT PREVIEW
// ============================================================================
const PREVIEW_BACKGROUND: Color = BASE_A;
const PAGE_FILL: Color = WHITE;
const PAGE_OUTLINE: Color = BLACK;
const PAGE_MARGIN: Color = BASE_H;
const PREVIEW_GLYPH: Color = BLACK;

// ============================================================================
// SIZES
// ============================================================================
const HAIRLINE: f64 = 1.0;
const PANEL_BORDER_WIDTH: f64 = 1.5;
const PANEL_RADIUS: f64 = 8.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Colors for UI panels and the mode toolbar
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const BUTTON_SELECTED: Color = super::BUTTON_SELECTED;
    pub const BUTTON_UNSELECTED: Color = super::BUTTON_UNSELECTED;
}

/// Colors for the glyph editor canvas and its annotation overlays
pub mod editor {
    use super::Color;
    pub const BACKGROUND: Color = super::EDITOR_BACKGROUND;
    pub const BORDER: Color = super::EDITOR_BORDER;
    pub const GLYPH: Color = super::EDITOR_GLYPH;
    pub const IN_POINT: Color = super::IN_POINT;
    pub const OUT_POINT: Color = super::OUT_POINT;
    pub const LIMITS: Color = super::LIMITS;
}

/// Colors for the text preview sheet
pub mod preview {
    use super::Color;
    pub const BACKGROUND: Color = super::PREVIEW_BACKGROUND;
    pub const PAGE_FILL: Color = super::PAGE_FILL;
    pub const PAGE_OUTLINE: Color = super::PAGE_OUTLINE;
    pub const MARGIN: Color = super::PAGE_MARGIN;
    pub const GLYPH: Color = super::PREVIEW_GLYPH;
}

/// Stroke widths and panel chrome
pub mod size {
    pub const HAIRLINE: f64 = super::HAIRLINE;
    pub const PANEL_BORDER_WIDTH: f64 = super::PANEL_BORDER_WIDTH;
    pub const PANEL_RADIUS: f64 = super::PANEL_RADIUS;
}
