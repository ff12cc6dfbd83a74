use crate::input::EventLatch;
use crate::perf::FrameClock;
use crate::settings::ToolSettings;
use crate::tool_view::ToolView;
use gpui::{FocusHandle, Pixels, Size};

/// Window entity: owns the canvas core and the input latch that feeds it.
pub struct CanvasTool {
    pub(crate) view: ToolView,
    pub(crate) latch: EventLatch,
    pub(crate) settings: ToolSettings,
    pub(crate) frame_clock: FrameClock,
    /// Status line written by `ToolView::draw` each frame
    pub(crate) status: String,
    pub(crate) focus_handle: FocusHandle,
    pub(crate) window_size: Option<Size<Pixels>>,
}

impl CanvasTool {
    pub fn view(&self) -> &ToolView {
        &self.view
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
