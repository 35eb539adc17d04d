//! Time access behind a single injectable seam.
//!
//! Every window check and countdown in this crate takes `now` as a value;
//! the surrounding application reads that value from one [`Clock`] instead
//! of calling `Utc::now()` at each site. Tests inject [`FixedClock`].

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock frozen at `time`.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self { time }
    }

    /// A copy of this clock shifted forward by `duration`.
    pub fn advanced_by(&self, duration: chrono::Duration) -> Self {
        Self {
            time: self.time + duration,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}
