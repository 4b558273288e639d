// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Workbench view: glyph editor on top, text preview below

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, button, flex_col, flex_row, label, sized_box};

use crate::components::{PreviewProps, glyph_editor_view, text_preview_view};
use crate::data::AppState;
use crate::editing::DrawingMode;
use crate::theme;

/// Uniform gap between panels
const GAP: f64 = 6.0;

/// Width of the annotation side panel
const SIDE_PANEL_WIDTH: f64 = 220.0;

pub fn workbench(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    flex_col((
        toolbar(state),
        flex_row((
            glyph_editor_view(state.editor.clone(), |state: &mut AppState, editor| {
                state.update_editor(editor);
            })
            .flex(1.0),
            annotation_panel(state),
        ))
        .gap(GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .flex(1.0),
        preview_controls(state),
        text_preview_view(preview_props(state)).flex(1.0),
    ))
    .gap(GAP.px())
    .padding(GAP * 2.0)
    .background_color(theme::app::BACKGROUND)
}

fn preview_props(state: &AppState) -> PreviewProps {
    PreviewProps {
        settings: state.settings.clone(),
        settings_path: state.settings_path.clone(),
        font_path: state.font_path.clone(),
        text: state.preview_text.clone(),
        page_generation: state.page_generation,
        settings_generation: state.settings_generation,
    }
}

// ===== Toolbar =====

/// File buttons and the drawing mode selector
fn toolbar(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let current = state.editor.mode();
    let mode_buttons: Vec<_> = DrawingMode::ALL
        .iter()
        .map(|&mode| mode_button(mode, mode == current))
        .collect();

    panel(
        flex_row((
            text_button("Open glyph…", |state: &mut AppState| {
                state.open_glyph_dialog();
            }),
            flex_row(mode_buttons).gap(2.px()),
            status_label(state).flex(1.0),
        ))
        .gap(GAP.px()),
    )
}

fn mode_button(mode: DrawingMode, is_selected: bool) -> impl WidgetView<AppState> + use<> {
    let bg_color = if is_selected {
        theme::panel::BUTTON_SELECTED
    } else {
        theme::panel::BUTTON_UNSELECTED
    };

    button(
        label(mode.label())
            .text_size(14.0)
            .color(theme::text::PRIMARY),
        move |state: &mut AppState| {
            state.toggle_mode(mode);
        },
    )
    .background_color(bg_color)
}

fn status_label(state: &AppState) -> impl WidgetView<AppState> + use<> {
    match &state.status {
        Some(message) => Either::A(
            label(message.clone())
                .text_size(14.0)
                .color(theme::text::SECONDARY),
        ),
        None => Either::B(label("")),
    }
}

// ===== Annotation Panel =====

fn annotation_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let glyph_name = state
        .editor
        .glyph_path()
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "No glyph".to_string());

    let lines: Vec<_> = state
        .annotation_summary()
        .into_iter()
        .map(|line| {
            label(line)
                .text_size(13.0)
                .color(theme::text::SECONDARY)
        })
        .collect();

    sized_box(
        flex_col((
            label(glyph_name)
                .text_size(16.0)
                .color(theme::text::PRIMARY),
            flex_col(lines)
                .gap(2.px())
                .cross_axis_alignment(CrossAxisAlignment::Start),
            label(format!("Zoom {:.0}%", state.editor.scale() * 100.0))
                .text_size(13.0)
                .color(theme::text::SECONDARY),
        ))
        .gap(GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .width(SIDE_PANEL_WIDTH.px())
    .padding(12.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}

// ===== Preview Controls =====

/// Font and page buttons plus the text to set
fn preview_controls(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let font_name = state
        .font_path
        .as_ref()
        .unwrap_or(&state.settings.last_used_font)
        .display()
        .to_string();

    panel(
        flex_row((
            text_button("Load font…", |state: &mut AppState| {
                state.open_font_dialog();
            }),
            text_button("Reset page", |state: &mut AppState| {
                state.reset_page();
            }),
            text_button("Reload settings", |state: &mut AppState| {
                state.reload_settings();
            }),
            label(font_name)
                .text_size(13.0)
                .color(theme::text::SECONDARY),
            xilem::view::text_input(
                state.preview_text.clone(),
                |state: &mut AppState, new_text| {
                    state.set_preview_text(new_text);
                },
            )
            .placeholder("Type text to preview")
            .flex(1.0),
        ))
        .gap(GAP.px()),
    )
}

// ===== Helpers =====

fn text_button(
    text: &'static str,
    on_click: impl Fn(&mut AppState) + Send + Sync + 'static,
) -> impl WidgetView<AppState> {
    button(
        label(text).text_size(14.0).color(theme::text::PRIMARY),
        on_click,
    )
    .background_color(theme::panel::BUTTON_UNSELECTED)
}

fn panel<V: WidgetView<AppState>>(content: V) -> impl WidgetView<AppState> {
    sized_box(content)
        .expand_width()
        .padding(Padding::from_vh(8.0, 12.0))
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::OUTLINE)
        .border_width(theme::size::PANEL_BORDER_WIDTH)
        .corner_radius(theme::size::PANEL_RADIUS)
}
