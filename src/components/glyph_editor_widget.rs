// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph editor canvas widget and its Xilem view

use kurbo::Affine;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerUpdate, PropertiesMut,
    PropertiesRef, RegisterCtx, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use super::paint::paint_display_list;
use super::wheel_delta;
use crate::editing::GlyphEditor;
use crate::model::ViewportPoint;

/// Canvas that shows one glyph and takes annotation input
pub struct GlyphEditorWidget {
    /// Working copy, published to the app on every committed change
    pub editor: GlyphEditor,
}

impl GlyphEditorWidget {
    pub fn new(editor: Arc<GlyphEditor>) -> Self {
        Self {
            editor: (*editor).clone(),
        }
    }

    fn emit_update(&self, ctx: &mut EventCtx<'_>) {
        ctx.submit_action::<EditorUpdate>(EditorUpdate {
            editor: self.editor.clone(),
        });
    }

    fn redraw_if_needed(&mut self, ctx: &mut EventCtx<'_>) {
        if self.editor.take_redraw() {
            ctx.request_render();
        }
    }
}

/// Action emitted when the annotation, mode or zoom changed
#[derive(Debug, Clone)]
pub struct EditorUpdate {
    pub editor: GlyphEditor,
}

impl Widget for GlyphEditorWidget {
    type Action = EditorUpdate;

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
        let size = bc.max();
        self.editor.resize(size);
        size
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.editor.take_redraw();
        paint_display_list(&self.editor.display_list(), scene, Affine::IDENTITY);
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
                let local = ctx.local_position(state.position);
                self.editor.pointer_down(ViewportPoint::from(local));
                self.redraw_if_needed(ctx);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                if self.editor.is_dragging() {
                    let local = ctx.local_position(current.position);
                    self.editor.pointer_drag(ViewportPoint::from(local));
                    ctx.request_render();
                }
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                if self.editor.is_dragging() {
                    let local = ctx.local_position(state.position);
                    self.editor.pointer_up(ViewportPoint::from(local));
                    ctx.request_render();
                    self.emit_update(ctx);
                }
                ctx.release_pointer();
            }

            PointerEvent::Cancel(_) => {
                if self.editor.is_dragging() {
                    self.editor.cancel_drag();
                    self.redraw_if_needed(ctx);
                    self.emit_update(ctx);
                }
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, .. }) => {
                let delta = wheel_delta(delta);
                if delta != 0.0 && self.editor.set_zoom(delta) {
                    self.redraw_if_needed(ctx);
                    self.emit_update(ctx);
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
        let label = self
            .editor
            .glyph_path()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(no glyph)".to_string());
        node.set_label(format!("Glyph editor: {}", label));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

// ============================================================================
// XILEM VIEW
// ============================================================================

/// Create a glyph editor view with a callback for editor updates
pub fn glyph_editor_view<State, F>(
    editor: Arc<GlyphEditor>,
    on_update: F,
) -> GlyphEditorView<State, F>
where
    F: Fn(&mut State, GlyphEditor) + Send + Sync + 'static,
{
    GlyphEditorView {
        editor,
        on_update,
        phantom: PhantomData,
    }
}

#[must_use = "View values do nothing unless provided to Xilem."]
pub struct GlyphEditorView<State, F> {
    editor: Arc<GlyphEditor>,
    on_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for GlyphEditorView<State, F> {}

impl<State: 'static, F: Fn(&mut State, GlyphEditor) + Send + Sync + 'static> View<State, (), ViewCtx>
    for GlyphEditorView<State, F>
{
    type Element = Pod<GlyphEditorWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let pod = ctx.create_pod(GlyphEditorWidget::new(self.editor.clone()));
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if Arc::ptr_eq(&self.editor, &prev.editor) {
            return;
        }
        let mut widget = element.downcast::<GlyphEditorWidget>();
        // Never interrupt a drag in progress
        if widget.widget.editor.is_dragging() {
            return;
        }
        let viewport = widget.widget.editor.viewport();
        widget.widget.editor = (*self.editor).clone();
        widget.widget.editor.resize(viewport);
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
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<EditorUpdate>() {
            Some(update) => {
                (self.on_update)(app_state, update.editor);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
