//! Application-wide constants.
//!
//! Centralizes default settings, layout values and mode labels.

// ============================================================================
// Window Defaults
// ============================================================================

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Smallest window edge accepted from the settings file
pub const MIN_WINDOW_EDGE: f32 = 160.0;

/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "Canvas Tool";

// ============================================================================
// Status Bar
// ============================================================================

/// Distance of the status panel from the bottom-left window corner
pub const STATUS_MARGIN_PX: f32 = 5.0;

/// Font size of the status line
pub const STATUS_TEXT_SIZE: f32 = 13.0;

// ============================================================================
// Camera
// ============================================================================

/// Pixels scrolled per wheel line when the platform reports line deltas
pub const SCROLL_LINE_PX: f32 = 20.0;

// ============================================================================
// Frame Timing
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Warn when a frame takes this many times the target
pub const SLOW_FRAME_FACTOR: f64 = 2.0;

// ============================================================================
// Settings & Logging
// ============================================================================

/// Directory under the platform config dir that holds our files
pub const SETTINGS_DIR: &str = "canvas-tool";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Log filter used when neither `RUST_LOG` nor the settings file set one
pub const DEFAULT_LOG_FILTER: &str = "canvas_tool=info";

// ============================================================================
// Mode Labels
// ============================================================================

pub const LABEL_PLACE_START: &str = "place start";
pub const LABEL_PLACE_END: &str = "place end";
