//! Wall-clock access for leaderboard timestamps.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
