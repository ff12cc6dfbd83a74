//! Mouse move handling and middle-drag panning.
//!
//! Mouse move fires far more often than frames are drawn, so the handler only
//! records the position; the pan itself runs once per tick from the sampled
//! relative motion.
//!
//! Moves also carry which button gpui sees down. With none down, any button
//! the latch still holds lost its release outside the window and is dropped.

use crate::app::CanvasTool;
use crate::input::{Button, window_pixel};
use gpui::*;
use tracing::debug;

impl CanvasTool {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let (x, y) = window_pixel(event.position);
        self.latch.move_to(x, y);

        if event.pressed_button.is_none() && !self.latch.held().is_empty() {
            debug!(held = ?self.latch.held(), "Dropping buttons released outside the window");
            self.latch.release_all();
        }
    }

    /// Pan while the middle button stays down across two ticks.
    ///
    /// The offset follows the cursor so the world point under it stays put.
    pub(crate) fn pan_with_middle_drag(&mut self) {
        let mouse = self.view.mouse();
        if !mouse.dragging(Button::Middle) {
            return;
        }
        let (dx, dy) = mouse.motion();
        if dx == 0 && dy == 0 {
            return;
        }
        self.view
            .transform_mut()
            .scroll_by(point(px(dx as f32), px(dy as f32)));
    }
}
