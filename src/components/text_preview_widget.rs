// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Text preview widget: a pannable, zoomable sheet of handwritten text
//!
//! The widget owns a [`TextPreviewCanvas`]. The view feeds it the text and
//! font chosen in the app and asks for a fresh layout whenever either
//! changes. Wheel zooms around the pointer, a primary drag pans.

use kurbo::{Affine, Point};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, NoAction, PaintCtx,
    PointerButton, PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerUpdate,
    PropertiesMut, PropertiesRef, RegisterCtx, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use std::marker::PhantomData;
use std::path::PathBuf;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use super::paint::paint_display_list;
use super::wheel_delta;
use crate::config::{Settings, TomlSettingsStore};
use crate::model::{GlifLoader, RandomPicker};
use crate::preview::TextPreviewCanvas;
use crate::theme;

pub struct TextPreviewWidget {
    canvas: TextPreviewCanvas,
    /// Last pointer position while panning
    pan_from: Option<Point>,
}

impl TextPreviewWidget {
    pub fn new(canvas: TextPreviewCanvas) -> Self {
        Self {
            canvas,
            pan_from: None,
        }
    }
}

impl Widget for TextPreviewWidget {
    type Action = NoAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        fill_color(scene, &ctx.size().to_rect(), theme::preview::BACKGROUND);
        paint_display_list(
            &self.canvas.display_list(),
            scene,
            self.canvas.view_transform(),
        );
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                ctx.capture_pointer();
                self.pan_from = Some(ctx.local_position(state.position));
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                if let Some(from) = self.pan_from {
                    let to = ctx.local_position(current.position);
                    self.canvas.pan(to - from);
                    self.pan_from = Some(to);
                    ctx.request_render();
                }
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                self.pan_from = None;
                ctx.release_pointer();
            }

            PointerEvent::Cancel(_) => {
                self.pan_from = None;
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, state, .. }) => {
                let delta = wheel_delta(delta);
                let anchor = ctx.local_position(state.position);
                if delta != 0.0 && self.canvas.set_zoom(delta, anchor) {
                    ctx.request_render();
                }
            }

            _ => {}
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!("Text preview: {}", self.canvas.text()));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

// ============================================================================
// XILEM VIEW
// ============================================================================

/// What the app hands to the preview
///
/// The generation counters are bumped by the app to request a page reset
/// or a settings reload; their values carry no other meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewProps {
    /// Settings the canvas starts with
    pub settings: Settings,
    /// Where the canvas re-reads settings and records the last used font
    pub settings_path: PathBuf,
    /// Font to show; `None` uses the last used font
    pub font_path: Option<PathBuf>,
    pub text: String,
    pub page_generation: u64,
    pub settings_generation: u64,
}

pub fn text_preview_view<State, Action>(props: PreviewProps) -> TextPreviewView<State, Action> {
    TextPreviewView {
        props,
        phantom: PhantomData,
    }
}

#[must_use = "View values do nothing unless provided to Xilem."]
pub struct TextPreviewView<State, Action = ()> {
    props: PreviewProps,
    phantom: PhantomData<fn() -> (State, Action)>,
}

impl<State, Action> ViewMarker for TextPreviewView<State, Action> {}

impl<State: 'static, Action: 'static> View<State, Action, ViewCtx>
    for TextPreviewView<State, Action>
{
    type Element = Pod<TextPreviewWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let props = &self.props;
        let mut canvas = TextPreviewCanvas::new(
            props.settings.clone(),
            Box::new(TomlSettingsStore::new(&props.settings_path)),
            Box::new(GlifLoader),
            Box::new(RandomPicker::from_entropy()),
        );
        match &props.font_path {
            Some(path) => canvas.load_font(path),
            None => canvas.load_startup_font(),
        };
        canvas.render_text(&props.text);
        (ctx.create_pod(TextPreviewWidget::new(canvas)), ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let (props, old) = (&self.props, &prev.props);
        if props == old {
            return;
        }
        let mut widget = element.downcast::<TextPreviewWidget>();
        let canvas = &mut widget.widget.canvas;

        if props.settings_generation != old.settings_generation {
            canvas.reload_settings();
        }
        if props.page_generation != old.page_generation {
            canvas.reset_page();
        }
        if props.font_path != old.font_path
            && let Some(path) = &props.font_path
        {
            canvas.load_font(path);
        }
        canvas.render_text(&props.text);
        widget.ctx.request_render();
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        _message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) -> MessageResult<Action> {
        MessageResult::Stale
    }
}
