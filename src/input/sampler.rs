//! Edge-triggered mouse state.
//!
//! The sampler keeps two generations of button state. `previous` is always
//! the `current` of the prior tick, so a release edge is visible for exactly
//! one tick.

use super::buttons::{Button, ButtonState, DeviceSample, PointerSample};
use gpui::{Pixels, Point};

/// Source of one pointer sample per tick.
///
/// Implementations may treat relative motion as consuming: each call reports
/// the motion accumulated since the previous call.
pub trait PointerDevice {
    fn sample(&mut self) -> DeviceSample;
}

/// Two-generation mouse state.
///
/// A default-constructed sampler reports no buttons, no edges and a cursor
/// at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseSampler {
    previous: ButtonState,
    current: ButtonState,
    pointer: PointerSample,
}

impl MouseSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both generations from one sample so the first tick has no edges.
    ///
    /// Motion reported by this first sample is discarded.
    pub fn initialize(&mut self, device: &mut impl PointerDevice) {
        let sample = device.sample();
        self.previous = sample.buttons;
        self.current = sample.buttons;
        self.pointer = PointerSample::at(sample.pointer.x, sample.pointer.y);
    }

    /// Advance one tick. Call exactly once per tick, before edge queries.
    pub fn update(&mut self, device: &mut impl PointerDevice) {
        self.previous = self.current;
        let sample = device.sample();
        self.current = sample.buttons;
        self.pointer = sample.pointer;
    }

    /// Held on the previous tick, up on this one.
    #[inline]
    pub fn released(&self, button: Button) -> bool {
        self.previous.is_pressed(button) && !self.current.is_pressed(button)
    }

    #[inline]
    pub fn held(&self, button: Button) -> bool {
        self.current.is_pressed(button)
    }

    /// Held on both this tick and the previous one.
    #[inline]
    pub fn dragging(&self, button: Button) -> bool {
        self.previous.is_pressed(button) && self.current.is_pressed(button)
    }

    pub fn left_released(&self) -> bool {
        self.released(Button::Left)
    }

    pub fn middle_released(&self) -> bool {
        self.released(Button::Middle)
    }

    pub fn right_released(&self) -> bool {
        self.released(Button::Right)
    }

    pub fn left_held(&self) -> bool {
        self.held(Button::Left)
    }

    pub fn middle_held(&self) -> bool {
        self.held(Button::Middle)
    }

    pub fn right_held(&self) -> bool {
        self.held(Button::Right)
    }

    /// Absolute window position in device pixels.
    pub fn position(&self) -> (i32, i32) {
        (self.pointer.x, self.pointer.y)
    }

    /// Relative motion reported by the latest sample.
    pub fn motion(&self) -> (i32, i32) {
        (self.pointer.dx, self.pointer.dy)
    }

    pub fn window_position(&self) -> Point<Pixels> {
        self.pointer.window_point()
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    pub fn buttons(&self) -> ButtonState {
        self.current
    }

    pub fn previous_buttons(&self) -> ButtonState {
        self.previous
    }
}
