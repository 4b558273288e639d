// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor and preview control for AppState

use std::sync::Arc;

use super::AppState;
use crate::editing::{DrawingMode, GlyphEditor};
use crate::model::{NormalizedPoint, NormalizedRect};

impl AppState {
    /// Take the editor state published by the editor widget
    pub fn update_editor(&mut self, editor: GlyphEditor) {
        self.editor = Arc::new(editor);
    }

    /// Switch the editor's drawing mode. Choosing the active mode again
    /// turns drawing off.
    pub fn toggle_mode(&mut self, mode: DrawingMode) {
        let next = if self.editor.mode() == mode {
            DrawingMode::None
        } else {
            mode
        };
        let mut editor = (*self.editor).clone();
        editor.set_mode(next);
        self.editor = Arc::new(editor);
    }

    pub fn set_preview_text(&mut self, text: String) {
        self.preview_text = text;
    }

    /// Recompute the preview sheet from the current dpi
    pub fn reset_page(&mut self) {
        self.page_generation += 1;
    }

    /// Make the preview re-read the settings file
    pub fn reload_settings(&mut self) {
        self.settings_generation += 1;
    }

    /// One line per annotation part, for the side panel
    pub fn annotation_summary(&self) -> Vec<String> {
        let annotation = self.editor.annotation();
        vec![
            format!("In: {}", format_point(annotation.in_point)),
            format!("Out: {}", format_point(annotation.out_point)),
            format!("Limits: {}", format_rect(annotation.limits)),
        ]
    }
}

fn format_point(point: NormalizedPoint) -> String {
    if point.is_set() {
        format!("{:.3}, {:.3}", point.x, point.y)
    } else {
        "unset".to_string()
    }
}

fn format_rect(rect: NormalizedRect) -> String {
    if rect.is_empty() {
        "unset".to_string()
    } else {
        format!(
            "{:.3}, {:.3} - {:.3}, {:.3}",
            rect.x0, rect.y0, rect.x1, rect.y1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::GlyphAnnotation;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(PathBuf::from("Settings.toml"), Settings::default())
    }

    #[test]
    fn test_toggle_mode() {
        let mut state = state();
        state.toggle_mode(DrawingMode::PlaceInPoint);
        assert_eq!(state.editor.mode(), DrawingMode::PlaceInPoint);
        state.toggle_mode(DrawingMode::DefineLimits);
        assert_eq!(state.editor.mode(), DrawingMode::DefineLimits);
        state.toggle_mode(DrawingMode::DefineLimits);
        assert_eq!(state.editor.mode(), DrawingMode::None);
    }

    #[test]
    fn test_generations_bump() {
        let mut state = state();
        state.reset_page();
        state.reload_settings();
        state.reload_settings();
        assert_eq!(state.page_generation, 1);
        assert_eq!(state.settings_generation, 2);
    }

    #[test]
    fn test_annotation_summary() {
        let mut state = state();
        assert_eq!(
            state.annotation_summary(),
            vec!["In: unset", "Out: unset", "Limits: unset"]
        );

        let mut editor = (*state.editor).clone();
        editor.set_annotation(GlyphAnnotation {
            in_point: NormalizedPoint::new(0.25, 0.5),
            ..GlyphAnnotation::unset()
        });
        state.update_editor(editor);
        assert_eq!(state.annotation_summary()[0], "In: 0.250, 0.500");
    }
}
