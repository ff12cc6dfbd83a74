//! Application lifecycle - construction and the per-frame tick.

use super::CanvasTool;
use crate::input::{EventLatch, window_pixel};
use crate::perf::FrameClock;
use crate::settings::ToolSettings;
use crate::tool_view::ToolView;
use gpui::*;
use tracing::{debug, info, trace};

impl CanvasTool {
    pub fn new(settings: ToolSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let (x, y) = window_pixel(window.mouse_position());
        let mut latch = EventLatch::at(x, y);
        let mut view = ToolView::new();
        view.initialize(&mut latch);

        let mut status = String::new();
        view.draw(&mut status);
        info!(title = %settings.title, "Canvas tool ready");

        Self {
            view,
            latch,
            settings,
            frame_clock: FrameClock::new(),
            status,
            focus_handle,
            window_size: None,
        }
    }

    /// One tick, then one draw. Called once per frame from `render`.
    pub(crate) fn tick(&mut self, window: &Window) {
        let dt = self.frame_clock.tick();
        trace!(dt_ms = dt * 1000.0, frames = self.frame_clock.frames(), "Frame tick");
        self.track_window_size(window);

        if self.view.update(&mut self.latch) {
            debug!(rearmed = ?self.view.modes().current_label(), "Mode consumed");
        }
        self.pan_with_middle_drag();
        self.view.draw(&mut self.status);
    }

    fn track_window_size(&mut self, window: &Window) {
        let size = window.bounds().size;
        if self.window_size != Some(size) {
            debug!(
                width = f32::from(size.width),
                height = f32::from(size.height),
                "Window resized"
            );
            self.window_size = Some(size);
        }
    }
}
