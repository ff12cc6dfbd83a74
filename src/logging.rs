//! Tracing subscriber setup.

use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins, then the settings filter, then [`DEFAULT_LOG_FILTER`].
pub fn env_filter(settings_filter: Option<&str>) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = settings_filter.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter {directives:?}"))
}

/// Install the global fmt subscriber.
pub fn init(settings_filter: Option<&str>) -> anyhow::Result<()> {
    let filter = env_filter(settings_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
