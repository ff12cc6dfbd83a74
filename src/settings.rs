//! User settings loaded from `<config dir>/canvas-tool/settings.json`.
//!
//! Every field is optional in the file; missing fields take their defaults
//! and unknown fields are ignored.

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_EDGE,
    SCROLL_LINE_PX, SETTINGS_DIR, SETTINGS_FILE,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub title: String,
    /// `tracing` filter directives, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
    /// Pixels per wheel line
    pub scroll_line_px: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_WINDOW_TITLE.to_string(),
            log_filter: None,
            scroll_line_px: SCROLL_LINE_PX,
        }
    }
}

/// Platform location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

impl ToolSettings {
    /// Load from the platform location. A missing file yields defaults.
    pub fn load() -> SettingsResult<Self> {
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let text = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !value.is_finite() || value < MIN_WINDOW_EDGE {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be at least {MIN_WINDOW_EDGE}, got {value}"
                )));
            }
        }
        if !self.scroll_line_px.is_finite() || self.scroll_line_px <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "scroll_line_px must be positive, got {}",
                self.scroll_line_px
            )));
        }
        if let Some(directives) = &self.log_filter {
            EnvFilter::try_new(directives).map_err(|e| {
                SettingsError::Invalid(format!(
                    "log_filter {directives:?} is not a valid filter: {e}"
                ))
            })?;
        }
        Ok(())
    }
}
