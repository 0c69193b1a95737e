//! Non-blocking binary flag.

use portable_atomic::{AtomicBool, Ordering};

/// Flag that can be claimed and released without blocking.
///
/// Both operations report `false` instead of waiting when the flag is already in the
/// requested state, so the caller decides whether to retry or give up.
#[derive(Debug, Default)]
pub struct AtomicFlag(AtomicBool);

impl AtomicFlag {
    /// Cleared flag.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Moves the flag to `set`. Returns `false` if it already was in that state.
    pub fn flag(&self, set: bool) -> bool {
        self.0
            .compare_exchange(!set, set, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Claims the flag. `false` means someone else holds it.
    pub fn check_and_set(&self) -> bool {
        self.flag(true)
    }

    /// Releases the flag. `false` means it was not held.
    pub fn check_and_clear(&self) -> bool {
        self.flag(false)
    }

    /// Current state.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
