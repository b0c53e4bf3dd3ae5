use thiserror::Error;

/// Failures while retrieving comments from the video platform API.
#[derive(Debug, Error)]
pub enum CommentError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("comment API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("comment API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the payload did not decode.
    #[error("malformed comment API response: {reason}")]
    MalformedResponse { reason: String },
}
