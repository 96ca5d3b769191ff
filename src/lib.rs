//! # noelide
//!
//! Keep benchmarked computations from being optimized away.
//!
//! An optimizing compiler may legally delete, hoist, or constant-fold code
//! whose result nothing observes. Inside a timing loop that makes the
//! measurement meaningless. [`do_not_optimize_away`] marks a value as escaping
//! to an opaque observer so the code that produced it has to run, every
//! iteration, at essentially no cost.
//!
//! This crate also carries the timing defaults a harness's statistics layer
//! starts from ([`US_PER_SEC`], [`DEFAULT_SAMPLE_SIZE`]) and a [`SampleConfig`]
//! through which a harness overrides them.
//!
//! ## Common Pitfall: Barrier Outside the Loop
//!
//! The barrier has to sit on the loop-carried value, inside the loop.
//!
//! ```
//! use noelide::do_not_optimize_away;
//!
//! // WRONG - the loop can still be folded to `x = 2016`
//! let mut x = 0u32;
//! for i in 0..64 {
//!     x += i;
//! }
//! do_not_optimize_away(&mut x);
//!
//! // CORRECT - every add is kept
//! let mut x = 0u32;
//! for i in 0..64 {
//!     x += i;
//!     do_not_optimize_away(&mut x);
//! }
//! # assert_eq!(x, 2016);
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use noelide::{do_not_optimize_away, us_to_secs, SampleConfig};
//! use std::time::Instant;
//!
//! let config = SampleConfig::from_env_or(SampleConfig::default());
//! let mut total_us = 0u64;
//! for _ in config.iterations() {
//!     let start = Instant::now();
//!     let mut x = 0u64;
//!     for i in 0..1024u64 {
//!         x += i;
//!         do_not_optimize_away(&mut x);
//!     }
//!     total_us += start.elapsed().as_micros() as u64;
//! }
//! let mean_secs = us_to_secs(total_us) / config.size() as f64;
//! assert!(mean_secs >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;

pub use config::{SampleConfig, SAMPLE_SIZE_ENV};
pub use error::ConfigError;

pub use noelide_core::hint;
pub use noelide_core::{
    do_not_optimize_away, duration_to_us, keep, secs_to_us, us_to_secs, Escape, Strategy, Touch,
    ACTIVE_STRATEGY, DEFAULT_SAMPLE_SIZE, US_PER_SEC,
};
