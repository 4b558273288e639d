// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph annotation editing model and interaction

pub mod glyph_editor;
pub mod mode;
pub mod zoom;

pub use glyph_editor::{GlyphEditor, ShowFlags};
pub use mode::DrawingMode;
pub use zoom::{ZoomLevel, wheel_factor};
