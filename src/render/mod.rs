//! Rendering - the canvas root element and the status panel.

mod canvas;
mod status;

pub use status::render_status_bar;
