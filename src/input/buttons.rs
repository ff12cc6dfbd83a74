//! Pointer button bitset and the per-tick device sample.

use gpui::{MouseButton, Pixels, Point, point, px};

/// A mouse button the sampler tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Left, Button::Middle, Button::Right];

    /// Bit of this button inside a [`ButtonState`].
    #[inline]
    pub const fn mask(self) -> u8 {
        match self {
            Button::Left => 1 << 0,
            Button::Middle => 1 << 1,
            Button::Right => 1 << 2,
        }
    }

    /// Map a gpui button; navigation buttons are not tracked.
    pub fn from_mouse_button(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Button::Left),
            MouseButton::Middle => Some(Button::Middle),
            MouseButton::Right => Some(Button::Right),
            _ => None,
        }
    }
}

const ALL_MASK: u8 = Button::Left.mask() | Button::Middle.mask() | Button::Right.mask();

/// Pressed flags for left, middle and right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ButtonState(u8);

impl ButtonState {
    pub const NONE: Self = Self(0);

    /// Build from a raw mask. Bits outside left/middle/right are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & ALL_MASK)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    #[inline]
    pub const fn without(self, button: Button) -> Self {
        Self(self.0 & !button.mask())
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Buttons in `self` but not in `other`.
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        *self = if pressed {
            self.with(button)
        } else {
            self.without(button)
        };
    }
}

impl FromIterator<Button> for ButtonState {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Absolute window position and relative motion since the previous sample,
/// in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl PointerSample {
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y, dx: 0, dy: 0 }
    }

    /// Position as a window-space gpui point.
    pub fn window_point(&self) -> Point<Pixels> {
        point(px(self.x as f32), px(self.y as f32))
    }
}

/// Everything the input collaborator hands over once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceSample {
    pub pointer: PointerSample,
    pub buttons: ButtonState,
}

impl DeviceSample {
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            pointer: PointerSample::at(x, y),
            buttons: ButtonState::NONE,
        }
    }

    pub const fn with_buttons(mut self, buttons: ButtonState) -> Self {
        self.buttons = buttons;
        self
    }

    pub const fn with_motion(mut self, dx: i32, dy: i32) -> Self {
        self.pointer.dx = dx;
        self.pointer.dy = dy;
        self
    }
}
