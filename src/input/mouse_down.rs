//! Mouse down event handling.

use crate::app::CanvasTool;
use crate::input::{Button, window_pixel};
use gpui::*;

impl CanvasTool {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let (x, y) = window_pixel(event.position);
        self.latch.move_to(x, y);

        if let Some(button) = Button::from_mouse_button(event.button) {
            self.latch.press(button);
        }

        if !self.focus_handle.is_focused(window) {
            window.focus(&self.focus_handle);
        }
    }
}
