//! Rejection Streak
//!
//! The host answers every payload, `log` included, with a snapshot. Logging
//! each rejected snapshot back to a host that keeps sending bad ones would
//! never stop, so only the first rejection after a good snapshot is reported.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RejectionStreak {
    active: Cell<bool>,
}

impl RejectionStreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot was rejected. Returns true if the host should hear about it.
    pub fn rejected(&self) -> bool {
        !self.active.replace(true)
    }

    /// A snapshot was applied; the next rejection is reported again.
    pub fn applied(&self) {
        self.active.set(false);
    }
}
