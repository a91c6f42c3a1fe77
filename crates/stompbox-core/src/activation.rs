//! Active / bypassed state.
//!
//! The flag is toggled from the control context (footswitch, MIDI) and read
//! by the effect inside its processing override. The framework itself never
//! enforces bypass: each effect decides what "bypassed" sounds like.
//!
//! Cloning an [`ActivationState`] shares the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared bypass flag. Defaults to active.
#[derive(Debug, Clone)]
pub struct ActivationState {
    active: Arc<AtomicBool>,
}

impl ActivationState {
    /// Create a new state.
    pub fn new(active: bool) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(active)),
        }
    }

    /// Set whether the effect is active (`true`) or bypassed (`false`).
    #[inline]
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    /// Returns `true` if the effect is active, `false` if bypassed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Flip the state and return the new value.
    pub fn toggle(&self) -> bool {
        !self.active.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for ActivationState {
    fn default() -> Self {
        Self::new(true)
    }
}
