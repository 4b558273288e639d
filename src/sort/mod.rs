// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Setting text with handwriting glyphs.
//!
//! A "sort" is a virtual representation of a physical typesetting sort - a
//! block carrying one character that is lined up with others to form text.
//! This module provides:
//! - Sort data structures for drawn glyphs and blank slots
//! - Page geometry derived from the output resolution
//! - The line-wrapping layout pass that places sorts on the page

pub mod data;
pub mod layout;
pub mod page;

pub use data::{Sort, SortKind};
pub use layout::{LayoutParams, TextLayout, lay_out_text};
pub use page::PageGeometry;
