//! Application module - the gpui window entity around the canvas core.
//!
//! - `state` - The CanvasTool struct definition
//! - `lifecycle` - Construction and the per-frame tick
//! - `shortcuts` - Keyboard shortcuts that arm and cancel modes

mod lifecycle;
mod shortcuts;
mod state;

pub use state::CanvasTool;
