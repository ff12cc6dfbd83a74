//! Canvas root element.
//!
//! Rendering is a hot path: the canvas redraws every animation frame so the
//! input tick keeps running while the mouse is still.

use crate::app::CanvasTool;
use crate::render::render_status_bar;
use gpui::*;

impl Render for CanvasTool {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.tick(window);
        window.request_animation_frame();

        div()
            .id("canvas")
            .track_focus(&self.focus_handle)
            .size_full()
            .relative()
            .bg(rgb(0x000000))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Middle, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::handle_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up(MouseButton::Middle, cx.listener(Self::handle_mouse_up))
            .on_mouse_up(MouseButton::Right, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Middle, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Right, cx.listener(Self::handle_mouse_up))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .on_key_down(cx.listener(Self::handle_key_down))
            .child(render_status_bar(&self.status))
    }
}
