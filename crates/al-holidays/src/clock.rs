//! Time source abstraction.

use chrono::{DateTime, Utc};

/// Source of "now" for staleness windows.
///
/// Production code uses [`SystemClock`]; tests substitute a controllable
/// clock to exercise the 24-hour catalog window and the 7-day update
/// interval deterministically.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
