//! Keyboard shortcuts.
//!
//! - `s` - place a start point, then chain into placing the end point
//! - `e` - place an end point only
//! - `escape` - cancel the pending mode

use super::CanvasTool;
use crate::constants::{LABEL_PLACE_END, LABEL_PLACE_START};
use crate::input::ModeDispatcher;
use gpui::*;
use tracing::info;

fn arm_place_end(modes: &mut ModeDispatcher, start: Option<Point<Pixels>>) {
    modes.assign_mode(LABEL_PLACE_END, move |end, _| match start {
        Some(start) => info!(
            start_x = f32::from(start.x),
            start_y = f32::from(start.y),
            end_x = f32::from(end.x),
            end_y = f32::from(end.y),
            "Segment placed"
        ),
        None => info!(x = f32::from(end.x), y = f32::from(end.y), "End placed"),
    });
}

impl CanvasTool {
    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event.keystroke.key.as_str() {
            "s" => {
                self.view.assign_mode(LABEL_PLACE_START, |start, modes| {
                    info!(x = f32::from(start.x), y = f32::from(start.y), "Start placed");
                    arm_place_end(modes, Some(start));
                });
            }
            "e" => arm_place_end(self.view.modes_mut(), None),
            "escape" => {
                self.view.cancel_mode();
            }
            _ => return,
        }
        self.view.draw(&mut self.status);
        cx.notify();
    }
}
