// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! File I/O operations for AppState (settings, glyphs, fonts)

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::AppState;
use crate::config::{Settings, SettingsStore, TomlSettingsStore};
use crate::model::{FontMap, GlifLoader};

/// Read the startup settings
pub fn load_settings(path: &Path) -> Result<Settings> {
    TomlSettingsStore::new(path)
        .load()
        .with_context(|| format!("Failed to read settings from {}", path.display()))
}

impl AppState {
    /// Open a file dialog to select a glyph to annotate
    pub fn open_glyph_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Open Glyph")
            .add_filter("UFO Glyph", &["glif"])
            .pick_file();

        if let Some(path) = path {
            self.open_glyph(path);
        }
    }

    /// Load a glyph into the editor. The annotation starts over.
    pub fn open_glyph(&mut self, path: PathBuf) {
        let mut editor = (*self.editor).clone();
        editor.load_path(&path, &GlifLoader);
        self.status = if editor.has_glyph() {
            None
        } else {
            Some(format!("Could not open glyph {}", path.display()))
        };
        self.editor = Arc::new(editor);
    }

    /// Open a file dialog to select a font resource for the preview
    pub fn open_font_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Load Font")
            .add_filter("Handwriter Font", &["toml"])
            .pick_file();

        if let Some(path) = path {
            self.set_font(path);
        }
    }

    /// Switch the preview to the font at `path`.
    ///
    /// An unreadable or empty font leaves the current one in place.
    pub fn set_font(&mut self, path: PathBuf) {
        match check_font(&path) {
            Ok(count) => {
                tracing::info!("Selected font {} ({} symbols)", path.display(), count);
                self.font_path = Some(path);
                self.status = None;
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.status = Some(format!("{:#}", e));
            }
        }
    }

    /// Open whatever was passed on the command line
    pub fn open_path(&mut self, path: PathBuf) {
        if path.extension().is_some_and(|ext| ext == "glif") {
            self.open_glyph(path);
        } else {
            self.set_font(path);
        }
    }
}

/// Number of symbols in the font at `path`, or why it is unusable
fn check_font(path: &Path) -> Result<usize> {
    let font = FontMap::load(path)?;
    if font.is_empty() {
        anyhow::bail!("Font {} has no entries", path.display());
    }
    Ok(font.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(dir: &Path) -> AppState {
        AppState::new(dir.join("Settings.toml"), Settings::default())
    }

    #[test]
    fn test_load_settings_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        std::fs::write(&path, "[Settings]\ndpi = \"lots\"\n").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Settings.toml"));

        let missing = load_settings(&dir.path().join("none.toml")).unwrap();
        assert_eq!(missing, Settings::default());
    }

    #[test]
    fn test_set_font_accepts_only_usable_fonts() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("Good.toml");
        let empty = dir.path().join("Empty.toml");
        std::fs::write(&good, "[Font]\na = \"a.glif\"\n").unwrap();
        std::fs::write(&empty, "[Font]\n").unwrap();

        let mut state = state_in(dir.path());
        state.set_font(good.clone());
        assert_eq!(state.font_path.as_deref(), Some(good.as_path()));
        assert!(state.status.is_none());

        state.set_font(empty);
        assert_eq!(state.font_path.as_deref(), Some(good.as_path()));
        assert!(state.status.is_some());
    }

    #[test]
    fn test_open_missing_glyph_reports_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let path = dir.path().join("missing.glif");

        state.open_path(path.clone());
        assert!(!state.editor.has_glyph());
        assert_eq!(state.editor.glyph_path(), Some(path.as_path()));
        assert!(state.status.is_some());
        assert!(state.font_path.is_none());
    }
}
