//! Composition root of the canvas core.
//!
//! `ToolView` owns the mouse sampler, the view transform and the mode
//! dispatcher. The shell calls [`ToolView::update`] once per tick and
//! [`ToolView::draw`] once per frame, in that order.

use crate::input::{ModeDispatcher, MouseSampler, PointerDevice, ViewTransform};
use crate::profile_scope;
use gpui::{Pixels, Point};

/// Receives the one-line status text each frame.
pub trait StatusSink {
    fn write_status(&mut self, line: &str);
}

impl StatusSink for String {
    fn write_status(&mut self, line: &str) {
        self.clear();
        self.push_str(line);
    }
}

#[derive(Debug, Default)]
pub struct ToolView {
    mouse: MouseSampler,
    transform: ViewTransform,
    modes: ModeDispatcher,
}

impl ToolView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, device: &mut impl PointerDevice) {
        self.mouse.initialize(device);
    }

    /// Sample the device, then let the dispatcher look at the fresh left
    /// release edge. Returns true if a mode fired.
    pub fn update(&mut self, device: &mut impl PointerDevice) -> bool {
        profile_scope!("tool_view_update");

        self.mouse.update(device);
        self.modes.poll(
            self.mouse.left_released(),
            self.mouse.window_position(),
            &self.transform,
        )
    }

    /// `(x,y)` of the raw cursor, followed by `, <label>` while a mode is armed.
    pub fn status_line(&self) -> String {
        let (x, y) = self.mouse.position();
        match self.modes.current_label() {
            Some(label) => format!("({x},{y}), {label}"),
            None => format!("({x},{y})"),
        }
    }

    pub fn draw(&self, sink: &mut impl StatusSink) {
        sink.write_status(&self.status_line());
    }

    pub fn assign_mode<F>(&mut self, label: impl Into<String>, callback: F)
    where
        F: FnOnce(Point<Pixels>, &mut ModeDispatcher) + 'static,
    {
        self.modes.assign_mode(label, callback);
    }

    pub fn cancel_mode(&mut self) -> bool {
        self.modes.cancel()
    }

    pub fn mouse(&self) -> &MouseSampler {
        &self.mouse
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ViewTransform {
        &mut self.transform
    }

    pub fn modes(&self) -> &ModeDispatcher {
        &self.modes
    }

    pub fn modes_mut(&mut self) -> &mut ModeDispatcher {
        &mut self.modes
    }
}
