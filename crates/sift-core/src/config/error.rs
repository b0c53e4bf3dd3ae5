//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
///
/// All of these are startup-fatal: a bad capacity or threshold fails fast at
/// construction, never at request time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Cache capacity string could not be parsed as a number.
    #[error("failed to parse cache capacity '{value}': {source}")]
    CapacityParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Cache capacity must hold at least one entry.
    #[error("invalid cache capacity {value}: must be at least 1")]
    InvalidCapacity { value: usize },

    /// Threshold string could not be parsed as a number.
    #[error("failed to parse threshold '{value}': {source}")]
    ThresholdParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Decision threshold must lie in `[0, 1]`.
    #[error("invalid threshold {value}: must be within [0, 1]")]
    InvalidThreshold { value: f32 },

    /// Scorer endpoint URL is empty.
    #[error("scorer URL must not be empty")]
    EmptyScorerUrl,
}
