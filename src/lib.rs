//! canvas-tool: a 2D canvas scaffold built around one-shot click modes.
//!
//! The core (`input` + `tool_view`) is windowing-agnostic apart from using
//! gpui's point types; `app` and `render` wrap it in a gpui window.

pub mod app;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod tool_view;

pub use error::{ModeError, SettingsError};
pub use tool_view::{StatusSink, ToolView};
