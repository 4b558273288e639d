// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Core data structures for sorts.

use kurbo::{Point, Rect, Size};
use std::path::{Path, PathBuf};

/// Kind of sort - a drawn glyph or a blank slot.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKind {
    /// A glyph drawing scaled to the line height.
    Glyph {
        /// The character this sort sets
        symbol: char,
        /// Variant chosen for this occurrence
        asset: PathBuf,
        /// Natural size to page units
        scale: f64,
    },
    /// A character the font cannot draw. Takes space, paints nothing.
    Blank { symbol: char },
}

/// One placed character on the preview page.
///
/// Positions are in page device units (dots), top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Sort {
    pub kind: SortKind,
    /// Top-left corner of the drawing box
    pub position: Point,
    /// Drawing box size (blank sorts use their advance as width)
    pub size: Size,
    /// Horizontal cursor movement after this sort
    pub advance: f64,
    /// Zero-based line index
    pub line: usize,
}

impl Sort {
    pub fn symbol(&self) -> char {
        match &self.kind {
            SortKind::Glyph { symbol, .. } | SortKind::Blank { symbol } => *symbol,
        }
    }

    /// Asset path if this sort draws something.
    pub fn asset(&self) -> Option<&Path> {
        match &self.kind {
            SortKind::Glyph { asset, .. } => Some(asset),
            SortKind::Blank { .. } => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, SortKind::Blank { .. })
    }

    /// Region the glyph drawing is fitted into.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}
