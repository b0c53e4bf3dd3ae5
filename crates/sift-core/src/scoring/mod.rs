//! External toxicity scorer capability.
//!
//! The model itself is a black box reached over HTTP: [`HttpScorer`] submits a
//! batch of normalized texts and gets one probability per text back. The
//! [`ToxicityScorer`] trait is the seam the orchestrator and the gateway are
//! generic over; [`MockScorer`] implements it for tests.

/// Scorer errors.
pub mod error;
/// HTTP scorer client.
pub mod http;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::ScoringError;
pub use http::HttpScorer;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockFailure, MockScorer};

/// Capability required by the batch orchestrator: score a batch of texts,
/// returning one probability in `[0, 1]` per input, same order.
pub trait ToxicityScorer: Send + Sync {
    /// Scores `texts` in a single invocation.
    fn score(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<f32>, ScoringError>> + Send;
}
