//! Mouse up event handling.
//!
//! Releases only update the latch; the mode fires on the next tick when the
//! sampler sees the edge.

use crate::app::CanvasTool;
use crate::input::{Button, window_pixel};
use gpui::*;

impl CanvasTool {
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let (x, y) = window_pixel(event.position);
        self.latch.move_to(x, y);

        if let Some(button) = Button::from_mouse_button(event.button) {
            self.latch.release(button);
        }
    }
}
