//! One-shot interaction modes.
//!
//! ## State Transitions
//!
//! ```text
//! Idle  -> Armed   (assign_mode)
//! Armed -> Armed   (assign_mode - the pending mode is discarded)
//! Armed -> Idle    (left release: callback fires, then the mode is gone)
//! Armed -> Idle    (cancel - callback never fires)
//! Idle  -> Idle    (cancel, or a release with nothing armed)
//! ```
//!
//! Only the left-button release fires a mode. Middle and right edges are
//! sampled but reserved for future modes.

use crate::error::ModeError;
use crate::input::coords::ViewTransform;
use gpui::{Pixels, Point};
use tracing::debug;

/// Called once with the world-space click position.
///
/// The dispatcher is handed back so the callback can chain another mode.
pub type ModeCallback = Box<dyn FnOnce(Point<Pixels>, &mut ModeDispatcher)>;

/// Box a closure as a [`ModeCallback`].
pub fn mode_callback<F>(callback: F) -> ModeCallback
where
    F: FnOnce(Point<Pixels>, &mut ModeDispatcher) + 'static,
{
    Box::new(callback)
}

/// A mode waiting for its click.
pub struct PendingMode {
    label: String,
    callback: ModeCallback,
}

impl PendingMode {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for PendingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingMode")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub enum ModeState {
    /// Nothing pending
    #[default]
    Idle,
    /// Waiting for one left release
    Armed(PendingMode),
}

/// Holds at most one pending mode.
#[derive(Debug, Default)]
pub struct ModeDispatcher {
    state: ModeState,
}

impl ModeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a mode. Any unconsumed mode is dropped without being called.
    pub fn assign_mode<F>(&mut self, label: impl Into<String>, callback: F)
    where
        F: FnOnce(Point<Pixels>, &mut ModeDispatcher) + 'static,
    {
        self.arm(label.into(), Box::new(callback));
    }

    /// Arm a mode from a callback that may be absent.
    ///
    /// `None` is rejected and leaves the current state untouched.
    pub fn try_assign_mode(
        &mut self,
        label: impl Into<String>,
        callback: Option<ModeCallback>,
    ) -> Result<(), ModeError> {
        let label = label.into();
        let Some(callback) = callback else {
            return Err(ModeError::MissingCallback { label });
        };
        self.arm(label, callback);
        Ok(())
    }

    fn arm(&mut self, label: String, callback: ModeCallback) {
        if let ModeState::Armed(pending) = &self.state {
            debug!(discarded = %pending.label, replacement = %label, "Replacing pending mode");
        } else {
            debug!(label = %label, "Mode armed");
        }
        self.state = ModeState::Armed(PendingMode { label, callback });
    }

    /// Fire the pending mode if `released` is set.
    ///
    /// The mode is taken out before its callback runs, so whatever the
    /// callback assigns is what remains armed afterwards. Returns true if a
    /// callback ran.
    pub fn poll(
        &mut self,
        released: bool,
        window_pos: Point<Pixels>,
        transform: &ViewTransform,
    ) -> bool {
        if !released || !self.is_armed() {
            return false;
        }
        let ModeState::Armed(pending) = std::mem::take(&mut self.state) else {
            return false;
        };

        let world = transform.to_world(window_pos);
        debug!(
            label = %pending.label,
            x = f32::from(world.x),
            y = f32::from(world.y),
            "Mode fired"
        );
        (pending.callback)(world, self);
        true
    }

    /// Drop the pending mode without calling it. Returns true if one was armed.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ModeState::Armed(pending) => {
                debug!(label = %pending.label, "Mode cancelled");
                true
            }
            ModeState::Idle => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, ModeState::Armed(_))
    }

    pub fn current_label(&self) -> Option<&str> {
        match &self.state {
            ModeState::Armed(pending) => Some(pending.label()),
            ModeState::Idle => None,
        }
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }
}
