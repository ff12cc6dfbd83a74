//! Canvas camera - scroll wheel panning.

use crate::app::CanvasTool;
use gpui::*;
use tracing::trace;

impl CanvasTool {
    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => point(
                px(delta.x * self.settings.scroll_line_px),
                px(delta.y * self.settings.scroll_line_px),
            ),
        };

        self.view.transform_mut().scroll_by(delta);
        trace!(
            offset_x = f32::from(self.view.transform().scroll_offset().x),
            offset_y = f32::from(self.view.transform().scroll_offset().y),
            "Canvas scrolled"
        );
    }
}
