// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph and font data model

pub mod annotation;
pub mod font_map;
pub mod geometry;
pub mod glyph_asset;
pub mod variant;

pub use annotation::GlyphAnnotation;
pub use font_map::{FontError, FontMap};
pub use geometry::{NormalizedPoint, NormalizedRect, ViewportPoint};
pub use glyph_asset::{AssetError, AssetLoader, GlifAsset, GlifLoader, VectorRenderer};
pub use variant::{FirstVariant, RandomPicker, VariantPicker};
