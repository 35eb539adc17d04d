//! Remaining payment-session time, formatted for display.

use chrono::{DateTime, Utc};
use std::fmt;

/// A strictly positive remaining duration, displayed as `M:SS`.
///
/// A countdown only exists while time remains; once the window closes the
/// lifecycle state flips to the expired variant and no countdown is
/// emitted, so a negative or zero value is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    millis: i64,
}

impl Countdown {
    /// Wrap a remaining duration in milliseconds. Returns `None` unless
    /// `millis > 0`.
    pub fn from_millis(millis: i64) -> Option<Self> {
        if millis > 0 {
            Some(Self { millis })
        } else {
            None
        }
    }

    /// Time remaining until `deadline`, or `None` if it has passed.
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        Self::from_millis((deadline - now).num_milliseconds())
    }

    /// Remaining time in milliseconds. Always positive.
    pub fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Whole minutes remaining.
    pub fn minutes(&self) -> i64 {
        self.millis / 60_000
    }

    /// Seconds remaining within the current minute, truncated.
    pub fn seconds(&self) -> i64 {
        (self.millis % 60_000) / 1_000
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}
