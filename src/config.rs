//! Harness-side sample configuration.
//!
//! The constants in [`noelide_core::constants`] are defaults, not settings.
//! A harness owns a [`SampleConfig`], seeds it from those defaults, and
//! overrides it per run or per benchmark without touching any global.

use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use noelide_core::constants::{DEFAULT_SAMPLE_SIZE, US_PER_SEC};

use crate::error::ConfigError;

/// Environment variable consulted by [`SampleConfig::from_env_or`].
pub const SAMPLE_SIZE_ENV: &str = "NOELIDE_SAMPLE_SIZE";

/// Sample settings handed to a benchmark harness.
///
/// Deserializing from a document that omits `sample_size` yields
/// [`DEFAULT_SAMPLE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Measurements taken per benchmark when the benchmark does not say
    /// otherwise. Always at least 1.
    #[serde(default = "default_sample_size", deserialize_with = "positive")]
    sample_size: usize,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn positive<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n = usize::deserialize(deserializer)?;
    if n == 0 {
        return Err(serde::de::Error::custom(ConfigError::ZeroSampleSize));
    }
    Ok(n)
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SampleConfig {
    /// Create a configuration with the default sample size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample size.
    ///
    /// # Panics
    /// If `n` is zero. Use [`try_sample_size`](Self::try_sample_size) for a
    /// fallible version.
    pub fn sample_size(mut self, n: usize) -> Self {
        assert!(n > 0, "sample_size must be positive");
        self.sample_size = n;
        self
    }

    /// Set the sample size, rejecting zero.
    pub fn try_sample_size(mut self, n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroSampleSize);
        }
        self.sample_size = n;
        Ok(self)
    }

    /// Configured sample size.
    pub fn size(&self) -> usize {
        self.sample_size
    }

    /// Sample count for one benchmark: its own override if it has one,
    /// otherwise the configured size. A zero override is ignored.
    pub fn resolve(&self, override_size: Option<usize>) -> usize {
        match override_size {
            Some(n) if n > 0 => n,
            Some(_) => {
                tracing::warn!(
                    "ignoring zero sample override, using {} samples",
                    self.sample_size
                );
                self.sample_size
            }
            None => self.sample_size,
        }
    }

    /// Repetition bound for the sample loop: `0..size()`.
    pub fn iterations(&self) -> Range<usize> {
        0..self.sample_size
    }

    /// Microseconds-per-second factor used to turn recorded durations into
    /// seconds. Fixed; exposed here so a harness can read every timing
    /// default from its configuration.
    pub fn us_per_sec(&self) -> f64 {
        US_PER_SEC
    }

    /// Read the sample size from `NOELIDE_SAMPLE_SIZE`, or use `default`.
    ///
    /// An unset variable keeps `default` silently. A value that does not
    /// parse, or is zero, is logged and ignored.
    pub fn from_env_or(default: Self) -> Self {
        match std::env::var(SAMPLE_SIZE_ENV) {
            Ok(raw) => match raw.parse::<SampleConfig>() {
                Ok(config) => {
                    tracing::debug!(
                        "{} overrides sample size: {} -> {}",
                        SAMPLE_SIZE_ENV,
                        default.sample_size,
                        config.sample_size
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!("{}: {}; keeping {}", SAMPLE_SIZE_ENV, e, default.sample_size);
                    default
                }
            },
            Err(_) => default,
        }
    }
}

impl FromStr for SampleConfig {
    type Err = ConfigError;

    /// Parse a bare sample size such as `"50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidSampleSize(s.to_string()))?;
        Self::new().try_sample_size(n)
    }
}
