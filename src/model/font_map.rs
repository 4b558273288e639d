// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Handwriting fonts: one or more glyph drawings per character
//!
//! A font resource is a TOML file with a single `[Font]` table. Each key's
//! first character is the symbol it provides; each value is a glyph asset
//! path or a list of them (variants of the same letter):
//!
//! ```toml
//! [Font]
//! a = ["a1.glif", "a2.glif", "a3.glif"]
//! b = "b.glif"
//! "!" = "/shared/exclam.glif"
//! ```
//!
//! Relative paths resolve against the directory holding the font file.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a font resource
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A single path or a list of paths
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathList {
    One(String),
    Many(Vec<String>),
}

impl PathList {
    fn into_vec(self) -> Vec<String> {
        match self {
            PathList::One(path) => vec![path],
            PathList::Many(paths) => paths,
        }
    }
}

/// `toml::Table` keeps document order with the `preserve_order` feature
#[derive(Debug, Deserialize)]
struct FontFile {
    #[serde(rename = "Font", default)]
    font: toml::Table,
}

/// Symbol -> ordered glyph variant paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMap {
    glyphs: HashMap<char, Vec<PathBuf>>,
}

impl FontMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a font resource from disk
    ///
    /// A file without a `[Font]` table, or with an empty one, yields an
    /// empty map; callers decide whether that replaces anything.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let text = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base_dir).map_err(|source| FontError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse font resource text, resolving relative paths against `base_dir`
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let file: FontFile = toml::from_str(text)?;

        let mut map = Self::new();
        for (key, value) in file.font {
            let paths: PathList = value.try_into()?;
            let Some(symbol) = key.chars().next() else {
                tracing::warn!("Skipping font entry with an empty key");
                continue;
            };
            for path in paths.into_vec() {
                // `join` keeps absolute paths as they are
                map.insert(symbol, base_dir.join(path));
            }
        }
        Ok(map)
    }

    /// Append a variant for `symbol`
    pub fn insert(&mut self, symbol: char, path: PathBuf) {
        self.glyphs.entry(symbol).or_default().push(path);
    }

    /// All variants for `symbol`, in file order
    pub fn variants(&self, symbol: char) -> &[PathBuf] {
        self.glyphs.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, symbol: char) -> bool {
        !self.variants(symbol).is_empty()
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Every asset path in the font
    pub fn asset_paths(&self) -> impl Iterator<Item = &Path> {
        self.glyphs.values().flatten().map(PathBuf::as_path)
    }

    /// Symbols in code point order
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.glyphs.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}
