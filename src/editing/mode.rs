// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! What a primary-button press in the glyph editor does

/// The editor's drawing mode
///
/// Exactly one mode is active, so placing an in-point and dragging limits
/// can never happen at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawingMode {
    /// Pointer input is ignored
    #[default]
    None,
    /// Press and drag position the in-point
    PlaceInPoint,
    /// Press and drag position the out-point
    PlaceOutPoint,
    /// Press anchors the limits rect, drag and release size it
    DefineLimits,
}

impl DrawingMode {
    /// Every mode, in toolbar order
    pub const ALL: [DrawingMode; 4] = [
        DrawingMode::None,
        DrawingMode::PlaceInPoint,
        DrawingMode::PlaceOutPoint,
        DrawingMode::DefineLimits,
    ];

    /// Toolbar label
    pub fn label(self) -> &'static str {
        match self {
            DrawingMode::None => "View",
            DrawingMode::PlaceInPoint => "In point",
            DrawingMode::PlaceOutPoint => "Out point",
            DrawingMode::DefineLimits => "Limits",
        }
    }

    pub fn is_drawing(self) -> bool {
        self != DrawingMode::None
    }
}
