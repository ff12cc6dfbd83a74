//! Turns windowing events into one pointer sample per tick.
//!
//! gpui delivers mouse input as discrete down/up/move events, while the
//! sampler wants a polled snapshot. The latch keeps the latest state between
//! frames and accumulates relative motion until the next sample.
//!
//! Every press shows up as held in at least one sample, and every release
//! of a button the last sample reported held shows up as one sample with
//! the button up. A release that never arrives (the button let go outside
//! the window) is cleared by [`EventLatch::release_all`].

use super::buttons::{Button, ButtonState, DeviceSample, PointerSample};
use super::sampler::PointerDevice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventLatch {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    held: ButtonState,
    /// Presses not yet observed by a sample
    unsampled: ButtonState,
    /// Re-presses held back until their release edge has been sampled
    deferred: ButtonState,
    /// Buttons in the last sample
    reported: ButtonState,
}

impl EventLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch starting at a known cursor position.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.dx = self.dx.saturating_add(x.saturating_sub(self.x));
        self.dy = self.dy.saturating_add(y.saturating_sub(self.y));
        self.x = x;
        self.y = y;
    }

    pub fn press(&mut self, button: Button) {
        if self.reported.is_pressed(button) && !self.held.is_pressed(button) {
            self.deferred.set(button, true);
        }
        self.held.set(button, true);
        self.unsampled.set(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.held.set(button, false);
    }

    /// Drop every held button, for when the platform reports none down.
    pub fn release_all(&mut self) {
        self.held = ButtonState::NONE;
    }

    pub fn held(&self) -> ButtonState {
        self.held
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl PointerDevice for EventLatch {
    /// Report the latched state and reset accumulated motion.
    ///
    /// A button pressed and released between two samples is reported held
    /// for one sample so its release edge still shows on the next tick. A
    /// release then re-press between two samples is reported up first and
    /// held on the sample after.
    fn sample(&mut self) -> DeviceSample {
        let buttons = self.held.union(self.unsampled).difference(self.deferred);
        self.unsampled = std::mem::take(&mut self.deferred);
        self.reported = buttons;

        let pointer = PointerSample {
            x: self.x,
            y: self.y,
            dx: std::mem::take(&mut self.dx),
            dy: std::mem::take(&mut self.dy),
        };
        DeviceSample { pointer, buttons }
    }
}
