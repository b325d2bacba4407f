//! The once-per-second tick flag.

use portable_atomic::{AtomicBool, Ordering};

/// The flag raised by the 1 Hz pulse-per-second edge and consumed by the
/// main loop.
///
/// This is the only datum that crosses the interrupt boundary, so it is the
/// only one that needs interrupt-safe access; `portable-atomic` gives a
/// sound `AtomicBool` even on cores without native atomics. Relaxed ordering
/// suffices - the flag carries no payload and everything else runs on one
/// thread.
pub struct TickFlag(AtomicBool);

impl TickFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Raise the flag. Safe to call from interrupt or task context.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Consume the flag: returns `true` at most once per raise.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

impl Default for TickFlag {
    fn default() -> Self {
        Self::new()
    }
}
