//! Error types for sample configuration.

/// Error returned when a sample configuration value is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A sample size of zero was requested.
    ///
    /// A harness needs at least one measurement to report anything.
    ZeroSampleSize,

    /// A sample size could not be parsed as an unsigned integer.
    ///
    /// Carries the offending text, e.g. the raw value of
    /// `NOELIDE_SAMPLE_SIZE`.
    InvalidSampleSize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSampleSize => write!(f, "sample_size must be positive"),
            Self::InvalidSampleSize(raw) => {
                write!(f, "sample_size '{}' is not a positive integer", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
