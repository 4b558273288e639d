// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the settings read at startup, the glyph editor, and
//! the inputs of the text preview. Every UI rebuild reads from
//! `AppState`; mutations happen in event callbacks. Sub-modules split the
//! methods by domain: file I/O and editor/preview control.

mod editor;
mod file_io;

pub use file_io::load_settings;

use kurbo::Size;
use std::path::PathBuf;
use std::sync::Arc;
use xilem::WindowId;

use crate::config::Settings;
use crate::editing::GlyphEditor;

/// Settings file used when `HANDWRITER_SETTINGS` is not set
pub const DEFAULT_SETTINGS_PATH: &str = "Settings.toml";

/// Main application state
pub struct AppState {
    /// Settings as read at startup
    pub settings: Settings,

    /// Where settings are read from and the last used font is recorded
    pub settings_path: PathBuf,

    /// Glyph editor, replaced wholesale on every editor update
    pub editor: Arc<GlyphEditor>,

    /// Text shown in the preview
    pub preview_text: String,

    /// Font chosen in this session; `None` uses the last used font
    pub font_path: Option<PathBuf>,

    /// Bumped to recompute the preview sheet from the current dpi
    pub page_generation: u64,

    /// Bumped to make the preview re-read the settings file
    pub settings_generation: u64,

    /// Last error or notice to display, if any
    pub status: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(settings_path: PathBuf, settings: Settings) -> Self {
        Self {
            settings,
            settings_path,
            editor: Arc::new(GlyphEditor::new(Size::new(800.0, 600.0))),
            preview_text: String::new(),
            font_path: None,
            page_generation: 0,
            settings_generation: 0,
            status: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Settings file named by `HANDWRITER_SETTINGS`, or `Settings.toml`
    pub fn settings_path_from_env() -> PathBuf {
        std::env::var_os("HANDWRITER_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
