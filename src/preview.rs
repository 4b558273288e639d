// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Text preview canvas: a sheet of paper with text set in a handwriting font
//!
//! The canvas owns the loaded font, a cache of glyph assets, and a
//! pan/zoom view transform from page units to widget pixels. Every
//! `render_text` call throws the previous scene away and lays the text
//! out again.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{Settings, SettingsStore};
use crate::editing::{ZoomLevel, wheel_factor};
use crate::model::{AssetLoader, FontMap, VariantPicker, VectorRenderer};
use crate::scene::DisplayList;
use crate::settings;
use crate::sort::{LayoutParams, PageGeometry, TextLayout, lay_out_text};
use crate::theme;

/// Everything drawn for the current text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewScene {
    pub sheet: Rect,
    pub margins: Rect,
    pub layout: TextLayout,
}

/// Loaded assets by path. A failed load is cached as `None`.
type AssetCache = HashMap<PathBuf, Option<Arc<dyn VectorRenderer>>>;

pub struct TextPreviewCanvas {
    settings: Settings,
    store: Box<dyn SettingsStore>,
    loader: Box<dyn AssetLoader>,
    picker: Box<dyn VariantPicker>,
    /// Fixed at construction; see `reset_page`
    page: PageGeometry,
    font: FontMap,
    font_path: Option<PathBuf>,
    assets: AssetCache,
    zoom: ZoomLevel,
    /// Page units to widget pixels
    transform: Affine,
    scene: PreviewScene,
    text: String,
}

impl TextPreviewCanvas {
    pub fn new(
        settings: Settings,
        store: Box<dyn SettingsStore>,
        loader: Box<dyn AssetLoader>,
        picker: Box<dyn VariantPicker>,
    ) -> Self {
        let page = PageGeometry::new(settings.dpi);
        let mut canvas = Self {
            settings,
            store,
            loader,
            picker,
            page,
            font: FontMap::new(),
            font_path: None,
            assets: AssetCache::new(),
            zoom: ZoomLevel::new(1.0, settings::preview::MIN_ZOOM, settings::preview::MAX_ZOOM),
            transform: Affine::IDENTITY,
            scene: PreviewScene {
                sheet: page.sheet,
                margins: page.margins,
                layout: TextLayout::default(),
            },
            text: String::new(),
        };
        canvas.zoom_by(settings::preview::INITIAL_ZOOM_STEP, Point::ZERO);
        canvas
    }

    // ============================================================================
    // FONT AND SETTINGS
    // ============================================================================

    /// Load a font resource and remember it as the last used font.
    ///
    /// Returns `false` and keeps the current font when the file cannot be
    /// read or has no entries.
    pub fn load_font(&mut self, path: &Path) -> bool {
        let font = match FontMap::load(path) {
            Ok(font) => font,
            Err(e) => {
                tracing::warn!("{}", e);
                return false;
            }
        };
        if font.is_empty() {
            tracing::warn!("Font {} has no entries, keeping current font", path.display());
            return false;
        }

        tracing::info!("Loaded font {} ({} symbols)", path.display(), font.len());
        self.font = font;
        self.font_path = Some(path.to_path_buf());
        self.assets.clear();

        self.settings.last_used_font = path.to_path_buf();
        if let Err(e) = self.store.set_last_used_font(path) {
            tracing::warn!("Could not remember last used font: {}", e);
        }
        true
    }

    /// Load the font used in the previous session
    pub fn load_startup_font(&mut self) -> bool {
        let path = self.settings.last_used_font.clone();
        self.load_font(&path)
    }

    /// Re-read dpi, font size and letter spacing from the store.
    ///
    /// The sheet keeps its geometry until `reset_page`.
    pub fn reload_settings(&mut self) {
        match self.store.load() {
            Ok(stored) => {
                self.settings.dpi = stored.dpi;
                self.settings.font_size = stored.font_size;
                self.settings.letter_spacing = stored.letter_spacing;
                tracing::debug!("Reloaded settings: {:?}", self.settings);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Recompute sheet and margins from the current dpi
    pub fn reset_page(&mut self) {
        self.page = PageGeometry::new(self.settings.dpi);
    }

    pub fn set_dpi(&mut self, dpi: u32) {
        self.settings.dpi = dpi;
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.settings.font_size = font_size;
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: f64) {
        self.settings.letter_spacing = letter_spacing;
    }

    // ============================================================================
    // VIEW TRANSFORM
    // ============================================================================

    /// Zoom by a wheel delta, keeping the page point under `anchor` fixed
    pub fn set_zoom(&mut self, delta: f64, anchor: Point) -> bool {
        let changed = self.zoom_by(wheel_factor(delta), anchor);
        tracing::debug!(
            "Preview zoom delta={:.1} scale={:.3} changed={}",
            delta,
            self.zoom.scale(),
            changed
        );
        changed
    }

    fn zoom_by(&mut self, factor: f64, anchor: Point) -> bool {
        if !self.zoom.apply_factor(factor) {
            return false;
        }
        let anchor = anchor.to_vec2();
        self.transform = Affine::translate(anchor)
            * Affine::scale(factor)
            * Affine::translate(-anchor)
            * self.transform;
        true
    }

    /// Move the page by `delta` widget pixels
    pub fn pan(&mut self, delta: Vec2) {
        self.transform = Affine::translate(delta) * self.transform;
    }

    pub fn view_transform(&self) -> Affine {
        self.transform
    }

    /// Widget pixels to page units
    pub fn to_page(&self, widget_point: Point) -> Point {
        self.transform.inverse() * widget_point
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    // ============================================================================
    // RENDERING
    // ============================================================================

    /// Throw away the scene and lay out `text` from scratch.
    ///
    /// Glyph size uses the page's dpi, so a reloaded dpi takes effect
    /// together with the sheet on `reset_page`.
    pub fn render_text(&mut self, text: &str) {
        let glyph_height = self.page.mm(self.settings.font_size);
        let params = LayoutParams {
            margins: self.page.margins,
            line_height: glyph_height,
            blank_advance: glyph_height,
            letter_spacing: self.settings.letter_spacing,
        };

        let loader = &*self.loader;
        let assets = &mut self.assets;
        let layout = lay_out_text(text, &self.font, &params, self.picker.as_mut(), |path| {
            cached_asset(assets, loader, path).map(|asset| asset.natural_size())
        });

        tracing::debug!(
            "Rendered {} chars: {} glyphs on {} lines",
            text.chars().count(),
            layout.glyphs().count(),
            layout.line_count()
        );
        self.text = text.to_string();
        self.scene = PreviewScene {
            sheet: self.page.sheet,
            margins: self.page.margins,
            layout,
        };
    }

    /// The scene in page units: sheet, margin frame, then glyphs
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        list.fill_rect(self.scene.sheet, theme::preview::PAGE_FILL);
        list.stroke_rect(
            self.scene.sheet,
            theme::preview::PAGE_OUTLINE,
            theme::size::HAIRLINE,
        );
        list.stroke_rect(
            self.scene.margins,
            theme::preview::MARGIN,
            theme::size::HAIRLINE,
        );

        for sort in self.scene.layout.glyphs() {
            let Some(asset) = sort
                .asset()
                .and_then(|path| self.assets.get(path))
                .and_then(Option::as_ref)
            else {
                continue;
            };
            list.fill_path(asset.render_into(sort.rect()), theme::preview::GLYPH);
        }
        list
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    pub fn scene(&self) -> &PreviewScene {
        &self.scene
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontMap {
        &self.font
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn page(&self) -> &PageGeometry {
        &self.page
    }

    /// Size of the whole sheet in page units
    pub fn sheet_size(&self) -> Size {
        self.page.sheet.size()
    }
}

fn cached_asset(
    assets: &mut AssetCache,
    loader: &dyn AssetLoader,
    path: &Path,
) -> Option<Arc<dyn VectorRenderer>> {
    assets
        .entry(path.to_path_buf())
        .or_insert_with(|| match loader.load(path) {
            Ok(asset) if asset.is_valid() => Some(asset),
            Ok(_) => {
                tracing::warn!("Glyph {} has no drawable size", path.display());
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .clone()
}
