// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for Handwriter

pub mod glyph_editor_widget;
pub mod paint;
pub mod text_preview_widget;

pub use glyph_editor_widget::glyph_editor_view;
pub use text_preview_widget::{PreviewProps, text_preview_view};

use masonry::core::ScrollDelta;

use crate::settings::input;

/// Wheel delta in wheel units (one notch = 120), positive zooms in
///
/// Masonry reports scrolling down as positive, which zooms out.
pub(crate) fn wheel_delta(delta: &ScrollDelta) -> f64 {
    match delta {
        ScrollDelta::LineDelta(_x, y) => -f64::from(*y) * input::WHEEL_NOTCH,
        ScrollDelta::PixelDelta(pos) => -pos.y,
        ScrollDelta::PageDelta(_x, y) => -f64::from(*y) * input::WHEEL_NOTCH * 3.0,
    }
}
