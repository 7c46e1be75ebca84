//! Injectable time source.
//!
//! The cache never reads wall-clock time directly; it asks its clock, so
//! tests drive expiry deterministically instead of sleeping.

use chrono::{DateTime, Utc};

/// Source of "now" for cache timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
