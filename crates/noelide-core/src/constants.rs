//! Timing constants shared with the harness statistics layer.
//!
//! These are defaults only. A harness that wants different values carries
//! them in its own configuration (see `noelide::SampleConfig`); nothing ever
//! mutates these.

/// Number of microseconds in one second.
///
/// Durations are recorded at microsecond resolution; dividing by this factor
/// gives seconds. Every whole multiple of it converts exactly.
pub const US_PER_SEC: f64 = 1_000_000.0;

/// Default number of samples taken per benchmark.
///
/// Thirty measurements is the conventional floor for a statistically
/// reasonable estimate of mean and variance. Harnesses use this value when a
/// benchmark does not supply its own sample count.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;
