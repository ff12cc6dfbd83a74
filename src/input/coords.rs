//! Window/world coordinate conversion for the canvas.
//!
//! The view is a pure translation by the scroll offset. Zoom, if it is ever
//! added, composes as a linear factor around the translation:
//! `world = (window - offset) / zoom`.

use gpui::{Pixels, Point, point, px};

/// Scroll/pan state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scroll_offset: Point<Pixels>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scroll_offset: point(px(0.0), px(0.0)),
        }
    }
}

impl ViewTransform {
    #[inline]
    pub fn new(scroll_offset: Point<Pixels>) -> Self {
        Self { scroll_offset }
    }

    pub fn scroll_offset(&self) -> Point<Pixels> {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: Point<Pixels>) {
        self.scroll_offset = offset;
    }

    /// Pan by a window-space delta
    pub fn scroll_by(&mut self, delta: Point<Pixels>) {
        self.scroll_offset = point(
            px(f32::from(self.scroll_offset.x) + f32::from(delta.x)),
            px(f32::from(self.scroll_offset.y) + f32::from(delta.y)),
        );
    }

    /// Convert window position to world position
    #[inline]
    pub fn to_world(&self, window_pos: Point<Pixels>) -> Point<Pixels> {
        point(
            px(f32::from(window_pos.x) - f32::from(self.scroll_offset.x)),
            px(f32::from(window_pos.y) - f32::from(self.scroll_offset.y)),
        )
    }

    /// Convert world position to window position
    #[inline]
    pub fn to_window(&self, world_pos: Point<Pixels>) -> Point<Pixels> {
        point(
            px(f32::from(world_pos.x) + f32::from(self.scroll_offset.x)),
            px(f32::from(world_pos.y) + f32::from(self.scroll_offset.y)),
        )
    }
}

/// Round a gpui window position to whole device pixels.
#[inline]
pub fn window_pixel(pos: Point<Pixels>) -> (i32, i32) {
    (
        f32::from(pos.x).round() as i32,
        f32::from(pos.y).round() as i32,
    )
}
