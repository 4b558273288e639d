// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph assets - the vector renderer behind the editor and the preview
//!
//! Neither the editor nor the preview knows the vector format. They only
//! ask an asset for its natural size and for its outline fitted into a
//! region. [`GlifAsset`] is the concrete renderer: it reads a UFO `.glif`
//! file with `norad` and converts the contours to a Kurbo path.

use kurbo::{Affine, BezPath, Point, Rect, Shape, Size};
use norad::{ContourPoint, PointType};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading a glyph asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load glyph {path}: {source}")]
    Glif {
        path: PathBuf,
        #[source]
        source: norad::error::GlifLoadError,
    },

    #[error("glyph {0} has no outline")]
    EmptyOutline(PathBuf),
}

/// Something that can draw one glyph
pub trait VectorRenderer: std::fmt::Debug + Send + Sync {
    /// Size of the glyph at scale 1. Zero for an asset that failed to load.
    fn natural_size(&self) -> Size;

    /// The glyph outline stretched to fill `region`
    fn render_into(&self, region: Rect) -> BezPath;

    fn is_valid(&self) -> bool {
        let size = self.natural_size();
        size.width > 0.0 && size.height > 0.0
    }
}

/// Resolves asset paths to renderers
pub trait AssetLoader: Send {
    fn load(&self, path: &Path) -> Result<Arc<dyn VectorRenderer>, AssetError>;
}

/// A `.glif` outline normalized to a Y-down box at the origin
#[derive(Debug, Clone)]
pub struct GlifAsset {
    outline: BezPath,
    size: Size,
}

impl GlifAsset {
    /// Load and convert a `.glif` file
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let glyph = norad::Glyph::load(path).map_err(|source| AssetError::Glif {
            path: path.to_path_buf(),
            source,
        })?;

        let mut outline = BezPath::new();
        for contour in &glyph.contours {
            append_contour_to_path(&mut outline, &contour.points);
        }

        let asset = Self::from_outline(outline)
            .ok_or_else(|| AssetError::EmptyOutline(path.to_path_buf()))?;
        tracing::debug!(
            "Loaded glyph {} ({:.1} x {:.1})",
            path.display(),
            asset.size.width,
            asset.size.height
        );
        Ok(asset)
    }

    /// Wrap a Y-up font-space outline. Returns `None` for an outline with
    /// an empty bounding box.
    pub fn from_outline(outline: BezPath) -> Option<Self> {
        if outline.is_empty() {
            return None;
        }
        let bounds = outline.bounding_box();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return None;
        }

        // Flip Y and move the bounding box to the origin
        let to_local = Affine::new([1.0, 0.0, 0.0, -1.0, -bounds.x0, bounds.y1]);
        Some(Self {
            outline: to_local * outline,
            size: bounds.size(),
        })
    }
}

impl VectorRenderer for GlifAsset {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn render_into(&self, region: Rect) -> BezPath {
        let sx = region.width() / self.size.width;
        let sy = region.height() / self.size.height;
        let transform = Affine::translate(region.origin().to_vec2())
            * Affine::scale_non_uniform(sx, sy);
        transform * &self.outline
    }
}

/// Loads `.glif` files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct GlifLoader;

impl AssetLoader for GlifLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn VectorRenderer>, AssetError> {
        Ok(Arc::new(GlifAsset::load(path)?))
    }
}

// ============================================================================
// CONTOUR CONVERSION
// ============================================================================

fn is_on_curve(pt: &ContourPoint) -> bool {
    !matches!(pt.typ, PointType::OffCurve)
}

fn to_kurbo(pt: &ContourPoint) -> Point {
    Point::new(pt.x, pt.y)
}

/// Append one UFO contour. A leading `Move` marks an open contour.
fn append_contour_to_path(path: &mut BezPath, points: &[ContourPoint]) {
    if points.is_empty() {
        return;
    }

    let open = matches!(points[0].typ, PointType::Move);

    // Closed contours may start on an off-curve point; rotate so the
    // path starts on-curve.
    let start = if open {
        0
    } else {
        match points.iter().position(is_on_curve) {
            Some(idx) => idx,
            // All off-curve: an implied-on-curve quadratic blob, skip it
            None => return,
        }
    };
    let rotated: Vec<&ContourPoint> = points[start..].iter().chain(points[..start].iter()).collect();

    path.move_to(to_kurbo(rotated[0]));

    let mut pending: Vec<Point> = Vec::new();
    for pt in &rotated[1..] {
        match pt.typ {
            PointType::OffCurve => pending.push(to_kurbo(pt)),
            PointType::Move | PointType::Line => {
                path.line_to(to_kurbo(pt));
                pending.clear();
            }
            PointType::Curve | PointType::QCurve => {
                add_segment(path, &pending, to_kurbo(pt));
                pending.clear();
            }
        }
    }

    if open {
        return;
    }

    // Trailing off-curve points curve back to the start
    if !pending.is_empty() {
        add_segment(path, &pending, to_kurbo(rotated[0]));
    }
    path.close_path();
}

fn add_segment(path: &mut BezPath, controls: &[Point], end: Point) {
    match controls {
        [] => path.line_to(end),
        [cp] => path.quad_to(*cp, end),
        [.., cp1, cp2] => path.curve_to(*cp1, *cp2, end),
    }
}
