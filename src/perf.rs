//! Frame timing and scoped profiling.
//!
//! `FrameClock` measures the time between ticks and warns about slow frames.
//! The `profile_scope!` macro times a block when the `profiling` feature is
//! on and compiles to nothing otherwise:
//!
//! ```ignore
//! fn update() {
//!     profile_scope!("update");
//!     // ... work ...
//! }
//! ```

use crate::constants::{SLOW_FRAME_FACTOR, TARGET_FRAME_MS};
use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

/// Time between consecutive ticks.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    frames: u64,
    slow_frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; zero on the first one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_tick.replace(now) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(last);
        self.frames += 1;

        let ms = elapsed.as_secs_f64() * 1000.0;
        if ms > TARGET_FRAME_MS * SLOW_FRAME_FACTOR {
            self.slow_frames += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }
        elapsed.as_secs_f32()
    }

    /// Ticks that measured an interval (the first tick does not).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frames
    }
}

/// Logs the lifetime of a scope at trace level on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        trace!(scope = self.name, elapsed_ms = format!("{:.3}", ms), "Scope timing");
    }
}
