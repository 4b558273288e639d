// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph editor state: annotation placement on a zoomable glyph
//!
//! The editor shows one glyph centered in its viewport, scaled by the
//! current zoom. The user places an in-point, an out-point and a limits
//! rect on it. Everything the user places is stored in normalized glyph
//! space (see `model::geometry`), so zooming or resizing the widget never
//! invalidates an annotation.
//!
//! This type is toolkit independent. `components::glyph_editor_widget`
//! feeds it pointer events and paints its display list.

use kurbo::{Rect, Size};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::mode::DrawingMode;
use super::zoom::ZoomLevel;
use crate::model::{
    AssetLoader, GlyphAnnotation, NormalizedPoint, NormalizedRect, VectorRenderer, ViewportPoint,
};
use crate::scene::DisplayList;
use crate::settings;
use crate::theme;

/// Which annotation parts are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowFlags {
    pub in_point: bool,
    pub out_point: bool,
    pub limits: bool,
}

impl ShowFlags {
    pub const ALL: Self = Self {
        in_point: true,
        out_point: true,
        limits: true,
    };

    pub fn any(&self) -> bool {
        self.in_point || self.out_point || self.limits
    }
}

/// The glyph annotation editor
#[derive(Debug, Clone)]
pub struct GlyphEditor {
    /// Displayed glyph; `None` before the first load or after a failed one
    glyph: Option<Arc<dyn VectorRenderer>>,
    glyph_path: Option<PathBuf>,
    annotation: GlyphAnnotation,
    /// Corner recorded when a limits drag started
    limits_anchor: NormalizedPoint,
    zoom: ZoomLevel,
    mode: DrawingMode,
    show: ShowFlags,
    viewport: Size,
    /// Primary button is held and the press started an interaction
    dragging: bool,
    needs_redraw: bool,
}

impl GlyphEditor {
    pub fn new(viewport: Size) -> Self {
        Self {
            glyph: None,
            glyph_path: None,
            annotation: GlyphAnnotation::unset(),
            limits_anchor: NormalizedPoint::UNSET,
            zoom: ZoomLevel::new(1.0, settings::editor::MIN_ZOOM, settings::editor::MAX_ZOOM),
            mode: DrawingMode::None,
            show: ShowFlags::default(),
            viewport,
            dragging: false,
            needs_redraw: true,
        }
    }

    // ============================================================================
    // GLYPH LOADING
    // ============================================================================

    /// Display `glyph` and forget the previous annotation
    pub fn load(&mut self, glyph: Arc<dyn VectorRenderer>) {
        if !glyph.is_valid() {
            tracing::warn!("Glyph has no drawable size, showing nothing");
        }
        self.glyph = Some(glyph);
        self.glyph_path = None;
        self.reset_annotation();
    }

    /// Load a glyph asset from disk through `loader`
    ///
    /// A failed load still resets the annotation; the editor then shows
    /// an empty canvas.
    pub fn load_path(&mut self, path: &Path, loader: &dyn AssetLoader) {
        match loader.load(path) {
            Ok(glyph) => {
                tracing::info!("Editing glyph {}", path.display());
                self.load(glyph);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.glyph = None;
                self.reset_annotation();
            }
        }
        self.glyph_path = Some(path.to_path_buf());
    }

    fn reset_annotation(&mut self) {
        self.annotation = GlyphAnnotation::unset();
        self.limits_anchor = NormalizedPoint::UNSET;
        self.show = ShowFlags::default();
        self.mode = DrawingMode::None;
        self.dragging = false;
        self.needs_redraw = true;
    }

    // ============================================================================
    // VIEW STATE
    // ============================================================================

    /// Zoom by a wheel delta. Out-of-range results are ignored.
    pub fn set_zoom(&mut self, delta: f64) -> bool {
        let changed = self.zoom.apply_wheel(delta);
        tracing::debug!(
            "Editor zoom delta={:.1} scale={:.3} changed={}",
            delta,
            self.zoom.scale(),
            changed
        );
        self.needs_redraw = true;
        changed
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
        self.dragging = false;
        self.needs_redraw = true;
    }

    pub fn resize(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.needs_redraw = true;
        }
    }

    /// Restore a saved annotation and show all of it
    pub fn set_annotation(&mut self, annotation: GlyphAnnotation) {
        self.annotation = annotation;
        self.limits_anchor = annotation.limits.top_left();
        self.show = ShowFlags::ALL;
        self.needs_redraw = true;
    }

    // ============================================================================
    // POINTER INPUT
    // ============================================================================

    /// Primary button pressed at `pos`
    pub fn pointer_down(&mut self, pos: ViewportPoint) {
        if !self.mode.is_drawing() {
            return;
        }
        let Some(point) = self.to_normalized(pos) else {
            return;
        };

        self.dragging = true;
        match self.mode {
            DrawingMode::PlaceInPoint => self.place_in_point(point),
            DrawingMode::PlaceOutPoint => self.place_out_point(point),
            DrawingMode::DefineLimits => self.limits_anchor = point,
            DrawingMode::None => {}
        }
    }

    /// Pointer moved with the primary button held
    pub fn pointer_drag(&mut self, pos: ViewportPoint) {
        if self.dragging {
            self.track(pos);
        }
    }

    /// Primary button released at `pos`
    pub fn pointer_up(&mut self, pos: ViewportPoint) {
        if !self.dragging {
            return;
        }
        self.track(pos);
        self.dragging = false;

        if self.mode == DrawingMode::DefineLimits {
            self.annotation.limits = self.annotation.limits.canonical();
            self.limits_anchor = self.annotation.limits.top_left();
            tracing::debug!("Limits set to {:?}", self.annotation.limits);
        }
    }

    /// The pointer was lost mid-drag. Keeps what was placed so far.
    pub fn cancel_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if self.mode == DrawingMode::DefineLimits {
            self.annotation.limits = self.annotation.limits.canonical();
            self.limits_anchor = self.annotation.limits.top_left();
        }
        self.needs_redraw = true;
    }

    fn track(&mut self, pos: ViewportPoint) {
        match self.mode {
            DrawingMode::PlaceInPoint => {
                if let Some(point) = self.to_normalized(pos) {
                    self.place_in_point(point);
                }
            }
            DrawingMode::PlaceOutPoint => {
                if let Some(point) = self.to_normalized(pos) {
                    self.place_out_point(point);
                }
            }
            DrawingMode::DefineLimits => {
                let clamped = self.clamp_to_viewport(pos);
                if let Some(corner) = self.to_normalized(clamped) {
                    self.annotation.limits = NormalizedRect::from_corners(self.limits_anchor, corner);
                    self.show.limits = true;
                    self.needs_redraw = true;
                }
            }
            DrawingMode::None => {}
        }
    }

    fn place_in_point(&mut self, point: NormalizedPoint) {
        self.annotation.in_point = point;
        self.show.in_point = true;
        self.needs_redraw = true;
    }

    fn place_out_point(&mut self, point: NormalizedPoint) {
        self.annotation.out_point = point;
        self.show.out_point = true;
        self.needs_redraw = true;
    }

    /// Keep a drag corner on the last visible pixel
    fn clamp_to_viewport(&self, pos: ViewportPoint) -> ViewportPoint {
        let max_x = (self.viewport.width - 1.0).max(0.0);
        let max_y = (self.viewport.height - 1.0).max(0.0);
        ViewportPoint::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
    }

    // ============================================================================
    // COORDINATE MAPPING
    // ============================================================================

    /// Where the glyph is drawn: natural size times zoom, centered
    pub fn glyph_rect(&self) -> Option<Rect> {
        let glyph = self.glyph.as_ref().filter(|g| g.is_valid())?;
        let size = glyph.natural_size() * self.zoom.scale();
        let x0 = self.viewport.width / 2.0 - size.width / 2.0;
        let y0 = self.viewport.height / 2.0 - size.height / 2.0;
        Some(Rect::new(x0, y0, x0 + size.width, y0 + size.height))
    }

    /// Viewport pixels to glyph-relative fractions
    pub fn to_normalized(&self, pos: ViewportPoint) -> Option<NormalizedPoint> {
        let rect = self.glyph_rect()?;
        Some(NormalizedPoint::new(
            (pos.x - rect.x0) / rect.width(),
            (pos.y - rect.y0) / rect.height(),
        ))
    }

    /// Glyph-relative fractions to viewport pixels
    pub fn to_viewport(&self, point: NormalizedPoint) -> Option<ViewportPoint> {
        let rect = self.glyph_rect()?;
        Some(ViewportPoint::new(
            rect.x0 + point.x * rect.width(),
            rect.y0 + point.y * rect.height(),
        ))
    }

    // ============================================================================
    // PAINTING
    // ============================================================================

    /// Returns whether a redraw was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The current frame: background, border, glyph, then overlays
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        let (w, h) = (self.viewport.width, self.viewport.height);

        list.fill_rect(self.viewport.to_rect(), theme::editor::BACKGROUND);
        list.stroke_rect(
            Rect::new(0.0, 0.0, (w - 1.0).max(0.0), (h - 1.0).max(0.0)),
            theme::editor::BORDER,
            theme::size::HAIRLINE,
        );

        let (Some(glyph), Some(rect)) = (&self.glyph, self.glyph_rect()) else {
            return list;
        };
        list.fill_path(glyph.render_into(rect), theme::editor::GLYPH);

        let diameter = settings::overlay::ANCHOR_MARK_DIAMETER;
        if self.show.in_point
            && self.annotation.in_point.is_set()
            && let Some(p) = self.to_viewport(self.annotation.in_point)
        {
            list.dot(p.to_kurbo(), diameter, theme::editor::IN_POINT);
        }

        if self.show.out_point
            && self.annotation.out_point.is_set()
            && let Some(p) = self.to_viewport(self.annotation.out_point)
        {
            list.dot(p.to_kurbo(), diameter, theme::editor::OUT_POINT);
        }

        let limits = self.annotation.limits;
        if self.show.limits
            && !limits.is_empty()
            && let (Some(a), Some(b)) = (
                self.to_viewport(limits.top_left()),
                self.to_viewport(limits.bottom_right()),
            )
        {
            list.stroke_rect(
                Rect::from_points(a.to_kurbo(), b.to_kurbo()),
                theme::editor::LIMITS,
                theme::size::HAIRLINE,
            );
        }

        list
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    pub fn annotation(&self) -> GlyphAnnotation {
        self.annotation
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn show_flags(&self) -> ShowFlags {
        self.show
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn has_glyph(&self) -> bool {
        self.glyph.as_ref().is_some_and(|g| g.is_valid())
    }

    pub fn glyph_path(&self) -> Option<&Path> {
        self.glyph_path.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::glyph_asset::testing::{BoxAsset, TableLoader};
    use crate::scene::Mark;

    const EPS: f64 = 1e-9;

    fn editor_with_glyph() -> GlyphEditor {
        let mut editor = GlyphEditor::new(Size::new(400.0, 300.0));
        editor.load(BoxAsset::shared(100.0, 50.0));
        editor
    }

    fn close(a: ViewportPoint, b: ViewportPoint) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_glyph_is_centered_and_scaled() {
        let mut editor = editor_with_glyph();
        assert_eq!(editor.glyph_rect(), Some(Rect::new(150.0, 125.0, 250.0, 175.0)));

        editor.set_zoom(240.0);
        let rect = editor.glyph_rect().unwrap();
        assert!((rect.width() - 120.0).abs() < EPS);
        assert!((rect.height() - 60.0).abs() < EPS);
        assert!((rect.center().x - 200.0).abs() < EPS);
        assert!((rect.center().y - 150.0).abs() < EPS);
    }

    #[test]
    fn test_corners_map_to_unit_square() {
        let editor = editor_with_glyph();
        let tl = editor.to_normalized(ViewportPoint::new(150.0, 125.0)).unwrap();
        let br = editor.to_normalized(ViewportPoint::new(250.0, 175.0)).unwrap();
        assert_eq!(tl, NormalizedPoint::new(0.0, 0.0));
        assert_eq!(br, NormalizedPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_round_trip_at_every_zoom() {
        let mut editor = editor_with_glyph();
        for step in 0..20 {
            let rect = editor.glyph_rect().unwrap();
            for (fx, fy) in [(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (1.0, 1.0), (0.9, 0.1)] {
                let p = ViewportPoint::new(
                    rect.x0 + fx * rect.width(),
                    rect.y0 + fy * rect.height(),
                );
                let back = editor.to_viewport(editor.to_normalized(p).unwrap()).unwrap();
                assert!(close(p, back), "step {step}: {p:?} -> {back:?}");
            }
            let delta = if step < 10 { 240.0 } else { -480.0 };
            editor.set_zoom(delta);
        }
    }

    #[test]
    fn test_annotation_survives_zoom_and_resize() {
        let mut editor = editor_with_glyph();
        editor.set_mode(DrawingMode::PlaceInPoint);
        editor.pointer_down(ViewportPoint::new(175.0, 150.0));
        editor.pointer_up(ViewportPoint::new(175.0, 150.0));
        let stored = editor.annotation().in_point;
        assert_eq!(stored, NormalizedPoint::new(0.25, 0.5));

        editor.set_zoom(480.0);
        editor.resize(Size::new(800.0, 600.0));
        assert_eq!(editor.annotation().in_point, stored);

        // Still a quarter of the way across the (now larger) glyph
        let rect = editor.glyph_rect().unwrap();
        let p = editor.to_viewport(stored).unwrap();
        assert!((p.x - (rect.x0 + rect.width() * 0.25)).abs() < EPS);
    }

    #[test]
    fn test_editor_zoom_bounds() {
        let mut editor = editor_with_glyph();
        for _ in 0..50 {
            editor.set_zoom(240.0);
            assert!(editor.scale() < settings::editor::MAX_ZOOM);
        }
        for _ in 0..100 {
            editor.set_zoom(-240.0);
            assert!(editor.scale() > settings::editor::MIN_ZOOM);
        }
    }

    #[test]
    fn test_place_points_by_mode() {
        let mut editor = editor_with_glyph();

        editor.set_mode(DrawingMode::PlaceInPoint);
        editor.pointer_down(ViewportPoint::new(150.0, 125.0));
        editor.pointer_drag(ViewportPoint::new(160.0, 130.0));
        editor.pointer_up(ViewportPoint::new(170.0, 135.0));
        assert_eq!(editor.annotation().in_point, NormalizedPoint::new(0.2, 0.2));
        assert!(editor.show_flags().in_point);
        assert!(!editor.show_flags().out_point);

        editor.set_mode(DrawingMode::PlaceOutPoint);
        editor.pointer_down(ViewportPoint::new(250.0, 175.0));
        editor.pointer_up(ViewportPoint::new(250.0, 175.0));
        assert_eq!(editor.annotation().out_point, NormalizedPoint::new(1.0, 1.0));
        // The in-point is untouched by out-point placement
        assert_eq!(editor.annotation().in_point, NormalizedPoint::new(0.2, 0.2));
    }

    #[test]
    fn test_drag_updates_point_continuously() {
        let mut editor = editor_with_glyph();
        editor.set_mode(DrawingMode::PlaceOutPoint);
        editor.pointer_down(ViewportPoint::new(150.0, 125.0));
        editor.pointer_drag(ViewportPoint::new(200.0, 150.0));
        assert_eq!(editor.annotation().out_point, NormalizedPoint::new(0.5, 0.5));
        assert!(editor.is_dragging());
    }

    #[test]
    fn test_no_mode_ignores_pointer() {
        let mut editor = editor_with_glyph();
        editor.pointer_down(ViewportPoint::new(200.0, 150.0));
        editor.pointer_drag(ViewportPoint::new(210.0, 150.0));
        editor.pointer_up(ViewportPoint::new(220.0, 150.0));
        assert!(editor.annotation().is_unset());
        assert!(!editor.show_flags().any());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut editor = editor_with_glyph();
        editor.set_mode(DrawingMode::PlaceInPoint);
        editor.pointer_drag(ViewportPoint::new(200.0, 150.0));
        assert!(!editor.annotation().in_point.is_set());
    }

    #[test]
    fn test_set_mode_is_exclusive() {
        let mut editor = editor_with_glyph();
        editor.set_mode(DrawingMode::PlaceInPoint);
        editor.set_mode(DrawingMode::DefineLimits);
        assert_eq!(editor.mode(), DrawingMode::DefineLimits);

        editor.pointer_down(ViewportPoint::new(160.0, 130.0));
        editor.pointer_up(ViewportPoint::new(240.0, 170.0));
        assert!(!editor.annotation().in_point.is_set());
        assert!(!editor.annotation().limits.is_empty());
    }

    fn drag_limits(editor: &mut GlyphEditor, from: ViewportPoint, to: ViewportPoint) -> NormalizedRect {
        editor.set_mode(DrawingMode::DefineLimits);
        editor.pointer_down(from);
        editor.pointer_drag(ViewportPoint::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
        editor.pointer_up(to);
        editor.annotation().limits
    }

    #[test]
    fn test_limits_canonicalized_for_every_drag_direction() {
        let a = ViewportPoint::new(160.0, 130.0);
        let b = ViewportPoint::new(240.0, 170.0);
        let c = ViewportPoint::new(160.0, 170.0);
        let d = ViewportPoint::new(240.0, 130.0);

        let forward = drag_limits(&mut editor_with_glyph(), a, b);
        assert!(forward.is_well_formed());
        assert!((forward.width() - 0.8).abs() < EPS);
        assert!((forward.height() - 0.8).abs() < EPS);

        for (from, to) in [(b, a), (c, d), (d, c)] {
            let limits = drag_limits(&mut editor_with_glyph(), from, to);
            assert!(limits.is_well_formed());
            assert_eq!(limits, forward);
        }
    }

    #[test]
    fn test_limits_corner_clamped_to_viewport() {
        let mut editor = editor_with_glyph();
        let limits = drag_limits(
            &mut editor,
            ViewportPoint::new(150.0, 125.0),
            ViewportPoint::new(5000.0, -40.0),
        );
        let expected_br = editor.to_normalized(ViewportPoint::new(399.0, 0.0)).unwrap();
        let expected_tl = editor.to_normalized(ViewportPoint::new(150.0, 125.0)).unwrap();
        assert_eq!(limits.x1, expected_br.x);
        assert_eq!(limits.y0, expected_br.y);
        assert_eq!(limits.x0, expected_tl.x);
        assert_eq!(limits.y1, expected_tl.y);
    }

    #[test]
    fn test_cancelled_limits_drag_is_kept_canonical() {
        let mut editor = editor_with_glyph();
        editor.set_mode(DrawingMode::DefineLimits);
        editor.pointer_down(ViewportPoint::new(240.0, 170.0));
        editor.pointer_drag(ViewportPoint::new(160.0, 130.0));
        editor.cancel_drag();

        assert!(!editor.is_dragging());
        let limits = editor.annotation().limits;
        assert!(limits.is_well_formed());
        assert!((limits.width() - 0.8).abs() < EPS);

        // Later moves do nothing until the next press
        editor.pointer_drag(ViewportPoint::new(200.0, 150.0));
        assert_eq!(editor.annotation().limits, limits);
    }

    #[test]
    fn test_load_resets_everything() {
        let mut editor = editor_with_glyph();
        editor.set_annotation(GlyphAnnotation {
            in_point: NormalizedPoint::new(0.1, 0.1),
            out_point: NormalizedPoint::new(0.9, 0.9),
            limits: NormalizedRect::new(0.0, 0.0, 1.0, 1.0),
        });
        editor.set_mode(DrawingMode::DefineLimits);
        editor.pointer_down(ViewportPoint::new(160.0, 130.0));

        editor.load(BoxAsset::shared(30.0, 30.0));
        assert_eq!(editor.annotation().in_point, NormalizedPoint::UNSET);
        assert_eq!(editor.annotation().out_point, NormalizedPoint::UNSET);
        assert_eq!(editor.annotation().limits, NormalizedRect::EMPTY);
        assert_eq!(editor.show_flags(), ShowFlags::default());
        assert_eq!(editor.mode(), DrawingMode::None);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_failed_load_resets_and_shows_nothing() {
        let mut editor = editor_with_glyph();
        editor.set_annotation(GlyphAnnotation {
            in_point: NormalizedPoint::new(0.5, 0.5),
            ..GlyphAnnotation::unset()
        });

        let loader = TableLoader::default();
        editor.load_path(Path::new("missing.glif"), &loader);
        assert!(!editor.has_glyph());
        assert!(editor.annotation().is_unset());
        assert_eq!(editor.glyph_path(), Some(Path::new("missing.glif")));
        assert!(editor.to_normalized(ViewportPoint::new(1.0, 1.0)).is_none());

        // Only background and border are painted
        assert_eq!(editor.display_list().len(), 2);
    }

    #[test]
    fn test_set_annotation_shows_all() {
        let mut editor = editor_with_glyph();
        let annotation = GlyphAnnotation {
            in_point: NormalizedPoint::new(0.0, 0.5),
            out_point: NormalizedPoint::new(1.0, 0.5),
            limits: NormalizedRect::new(0.1, 0.1, 0.9, 0.9),
        };
        editor.set_annotation(annotation);
        assert_eq!(editor.annotation(), annotation);
        assert_eq!(editor.show_flags(), ShowFlags::ALL);
    }

    #[test]
    fn test_display_list_order_and_colors() {
        let mut editor = editor_with_glyph();
        editor.set_annotation(GlyphAnnotation {
            in_point: NormalizedPoint::new(0.0, 0.5),
            out_point: NormalizedPoint::new(1.0, 0.5),
            limits: NormalizedRect::new(0.1, 0.1, 0.9, 0.9),
        });

        let list = editor.display_list();
        let colors: Vec<_> = list.marks().iter().map(Mark::color).collect();
        assert_eq!(
            colors,
            vec![
                theme::editor::BACKGROUND,
                theme::editor::BORDER,
                theme::editor::GLYPH,
                theme::editor::IN_POINT,
                theme::editor::OUT_POINT,
                theme::editor::LIMITS,
            ]
        );

        match &list.marks()[3] {
            Mark::Dot { center, .. } => {
                assert!((center.x - 150.0).abs() < EPS);
                assert!((center.y - 150.0).abs() < EPS);
            }
            other => panic!("expected in-point dot, got {other:?}"),
        }
    }

    #[test]
    fn test_redraw_requested_by_state_changes() {
        let mut editor = editor_with_glyph();
        assert!(editor.take_redraw());
        assert!(!editor.take_redraw());

        editor.set_zoom(10_000.0); // rejected, still repaints
        assert!(editor.take_redraw());

        editor.set_mode(DrawingMode::PlaceInPoint);
        assert!(editor.take_redraw());
        editor.pointer_down(ViewportPoint::new(200.0, 150.0));
        assert!(editor.take_redraw());
    }
}
