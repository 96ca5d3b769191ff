//! Optimization barrier and timing constants for micro-benchmark harnesses.
//!
//! This crate holds the one primitive a timing loop cannot do without: a way
//! to tell the compiler that a value escapes to an observer it cannot see, so
//! the computation producing it is neither deleted, hoisted, nor folded into
//! a constant. It works in `no_std` environments and never allocates.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support for convenience
//! - `force-volatile`: Select the volatile-alias barrier even on targets
//!   where the inline-assembly barrier is available
//!
//! # Usage
//!
//! This crate is typically used through the main `noelide` crate, which adds
//! harness-side sample configuration. It can be used directly for embedded or
//! no_std harnesses.
//!
//! ```
//! use noelide_core::{do_not_optimize_away, DEFAULT_SAMPLE_SIZE};
//!
//! let mut x = 0u64;
//! for _ in 0..DEFAULT_SAMPLE_SIZE {
//!     for i in 0..64u64 {
//!         x += i;
//!         do_not_optimize_away(&mut x);
//!     }
//! }
//! assert_eq!(x, 30 * 2016);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod constants;
pub mod hint;
pub mod units;

// Re-export commonly used items at crate root
pub use constants::{DEFAULT_SAMPLE_SIZE, US_PER_SEC};
pub use hint::{do_not_optimize_away, keep, Escape, Strategy, Touch, ACTIVE_STRATEGY};
pub use units::{duration_to_us, secs_to_us, us_to_secs};
