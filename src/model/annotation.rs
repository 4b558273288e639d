// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-glyph annotation: connection anchors and bounding limits

use super::geometry::{NormalizedPoint, NormalizedRect};
use serde::{Deserialize, Serialize};

/// Designer-specified data attached to one glyph
///
/// The in-point and out-point are where a stroke enters and leaves the
/// letter; a layout consumer joins consecutive glyphs through them. The
/// limits rect bounds the part of the glyph's canvas that counts as the
/// letter. All three live in normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphAnnotation {
    pub in_point: NormalizedPoint,
    pub out_point: NormalizedPoint,
    pub limits: NormalizedRect,
}

impl GlyphAnnotation {
    /// Nothing placed yet
    pub fn unset() -> Self {
        Self {
            in_point: NormalizedPoint::UNSET,
            out_point: NormalizedPoint::UNSET,
            limits: NormalizedRect::EMPTY,
        }
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::unset()
    }
}
