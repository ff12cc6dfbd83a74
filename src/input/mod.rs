//! Mouse and scroll input for the canvas.
//!
//! ## Architecture
//!
//! Input is polled, not pushed: gpui events only update an [`EventLatch`],
//! and once per frame the [`MouseSampler`] takes one sample from it. Edges
//! are derived from two consecutive samples, and a [`ModeDispatcher`] fires
//! its pending one-shot mode on a left-button release.
//!
//! ## Modules
//!
//! - `buttons` - Button bitset and per-tick device sample
//! - `sampler` - Two-generation mouse state and edge queries
//! - `coords` - Window/world conversion (`ViewTransform`)
//! - `mode` - One-shot mode state machine
//! - `latch` - gpui event stream to polled samples
//! - `mouse_down` / `mouse_up` / `drag` - gpui mouse event handlers
//! - `transform` - Scroll wheel and middle-drag panning

pub mod buttons;
pub mod coords;
pub mod latch;
pub mod mode;
pub mod sampler;
mod drag;
mod mouse_down;
mod mouse_up;
mod transform;

pub use buttons::{Button, ButtonState, DeviceSample, PointerSample};
pub use coords::{ViewTransform, window_pixel};
pub use latch::EventLatch;
pub use mode::{ModeCallback, ModeDispatcher, ModeState, PendingMode, mode_callback};
pub use sampler::{MouseSampler, PointerDevice};
