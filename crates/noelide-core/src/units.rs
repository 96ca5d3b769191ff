//! Microsecond/second conversions built on [`US_PER_SEC`].
//!
//! Harnesses record durations as whole microseconds and report seconds.
//! Dividing by a power of ten that is itself exactly representable keeps
//! whole multiples exact: `2_500_000 us` is exactly `2.5 s`.

use core::time::Duration;

use crate::constants::US_PER_SEC;

/// Convert microseconds to seconds.
#[inline]
pub fn us_to_secs(us: u64) -> f64 {
    us as f64 / US_PER_SEC
}

/// Convert seconds to microseconds.
#[inline]
pub fn secs_to_us(secs: f64) -> f64 {
    secs * US_PER_SEC
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
#[inline]
pub fn duration_to_us(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
