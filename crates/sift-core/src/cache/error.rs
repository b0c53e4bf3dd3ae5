//! Cache construction errors.

use thiserror::Error;

/// Errors raised when building a [`super::ScoreCache`].
#[derive(Debug, Error)]
pub enum CacheError {
    /// Capacity must hold at least one entry.
    #[error("invalid cache capacity {value}: must be at least 1")]
    InvalidCapacity { value: usize },
}
