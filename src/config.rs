// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Persisted user settings.
//!
//! Settings are read once at startup into a plain [`Settings`] value and
//! handed to the components that need them. Writes go back through a
//! [`SettingsStore`], so tests and headless callers can swap the file for
//! an in-memory store.
//!
//! On disk the settings live in a TOML file with a single `[Settings]`
//! table:
//!
//! ```toml
//! [Settings]
//! last-used-font = "fonts/Default/DefaultFont.toml"
//! dpi = 300
//! font-size = 6.0
//! letter-spacing = -10.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

use crate::settings::{page, typography};

/// Errors raised while reading or writing the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User-tunable typography settings plus the last loaded font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Font resource loaded on the previous run
    pub last_used_font: PathBuf,
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Glyph height in millimeters
    pub font_size: f64,
    /// Extra advance between glyphs in device units
    pub letter_spacing: f64,
}

impl Settings {
    /// Dots per millimeter derived from [`Settings::dpi`]
    pub fn dpmm(&self) -> f64 {
        f64::from(self.dpi) / page::MM_PER_INCH
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_used_font: PathBuf::from(typography::FONT_PATH),
            dpi: typography::DPI,
            font_size: typography::FONT_SIZE,
            letter_spacing: typography::LETTER_SPACING,
        }
    }
}

/// File layout: everything sits under a `[Settings]` group
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "Settings", default)]
    settings: Settings,
}

/// Where settings are read from and written to
pub trait SettingsStore: Send {
    fn load(&self) -> Result<Settings, ConfigError>;
    fn save(&mut self, settings: &Settings) -> Result<(), ConfigError>;

    /// Record the last used font, leaving every other stored value as it is
    fn set_last_used_font(&mut self, path: &Path) -> Result<(), ConfigError> {
        let mut stored = self.load()?;
        stored.last_used_font = path.to_path_buf();
        self.save(&stored)
    }
}

/// Settings stored in a TOML file on disk
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    /// A missing file is not an error: it yields the defaults.
    fn load(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(
                "Settings file {} not found, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        let file: SettingsFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(file.settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), ConfigError> {
        let file = SettingsFile {
            settings: settings.clone(),
        };
        let text = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store. Clones share the same slot, which lets a caller keep a
/// handle and observe what a component wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    slot: Arc<Mutex<Settings>>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            slot: Arc::new(Mutex::new(settings)),
        }
    }

    /// Current stored value
    pub fn snapshot(&self) -> Settings {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the stored value without going through `save`
    pub fn replace(&self, settings: Settings) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = settings;
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings, ConfigError> {
        Ok(self.snapshot())
    }

    fn save(&mut self, settings: &Settings) -> Result<(), ConfigError> {
        self.replace(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.dpi, 300);
        assert_eq!(settings.font_size, 6.0);
        assert_eq!(settings.letter_spacing, -10.0);
        assert_eq!(settings.last_used_font, PathBuf::from("DefaultFont.toml"));
        assert!((settings.dpmm() - 300.0 / 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("Settings.toml"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_kebab_case_group() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        std::fs::write(
            &path,
            "[Settings]\nlast-used-font = \"fonts/mine.toml\"\ndpi = 600\nletter-spacing = 2.5\n",
        )
        .unwrap();

        let settings = TomlSettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.dpi, 600);
        assert_eq!(settings.letter_spacing, 2.5);
        assert_eq!(settings.last_used_font, PathBuf::from("fonts/mine.toml"));
        // Missing key falls back to its default
        assert_eq!(settings.font_size, 6.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TomlSettingsStore::new(dir.path().join("Settings.toml"));
        let settings = Settings {
            last_used_font: PathBuf::from("/abs/font.toml"),
            dpi: 150,
            font_size: 8.0,
            letter_spacing: 0.0,
        };
        store.save(&settings).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("[Settings]"));
        assert!(text.contains("last-used-font"));
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        std::fs::write(&path, "[Settings]\ndpi = \"lots\"\n").unwrap();

        let result = TomlSettingsStore::new(&path).load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_set_last_used_font_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Settings.toml");
        std::fs::write(&path, "[Settings]\ndpi = 600\nfont-size = 4.0\n").unwrap();

        let mut store = TomlSettingsStore::new(&path);
        store.set_last_used_font(Path::new("fonts/Hand.toml")).unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.last_used_font, PathBuf::from("fonts/Hand.toml"));
        assert_eq!(settings.dpi, 600);
        assert_eq!(settings.font_size, 4.0);
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemorySettingsStore::default();
        let mut writer = store.clone();
        let settings = Settings {
            dpi: 72,
            ..Settings::default()
        };
        writer.save(&settings).unwrap();
        assert_eq!(store.snapshot().dpi, 72);
    }
}
