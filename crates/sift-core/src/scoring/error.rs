use thiserror::Error;

/// Failures of the external scorer, classified so callers can tell a dead
/// scorer from one that rejected the input. Any variant fails the whole batch
/// call; no partial cache writes happen for a failed batch.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The scorer could not be reached or answered with a server error.
    /// Retryable by the caller.
    #[error("scorer unavailable: {reason}")]
    Unavailable { reason: String },

    /// The scorer rejected the submitted batch (HTTP 4xx).
    #[error("scorer rejected input (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The scorer answered, but the payload did not match the contract
    /// (wrong score count, out-of-range score, or undecodable body).
    #[error("malformed scorer response: {reason}")]
    MalformedResponse { reason: String },
}
