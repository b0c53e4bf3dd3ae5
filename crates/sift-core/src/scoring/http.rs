use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ToxicityScorer;
use super::error::ScoringError;

#[derive(Serialize)]
struct ScoreRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct ScoreResponse {
    scores: Vec<f32>,
}

/// HTTP client for the toxicity inference endpoint.
///
/// POSTs `{"texts": [...]}` and expects `{"scores": [...]}` with one score per
/// text, same order. Response validation happens here so the orchestrator only
/// ever sees a well-formed score vector or a classified [`ScoringError`].
#[derive(Debug, Clone)]
pub struct HttpScorer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScorer {
    /// Creates a scorer client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ScoringError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScoringError::Unavailable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(e: reqwest::Error) -> ScoringError {
        let reason = if e.is_timeout() {
            format!("request timed out: {e}")
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            e.to_string()
        };
        ScoringError::Unavailable { reason }
    }
}

impl ToxicityScorer for HttpScorer {
    async fn score(&self, texts: &[String]) -> Result<Vec<f32>, ScoringError> {
        debug!(batch_size = texts.len(), "Submitting batch to scorer");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ScoreRequest { texts })
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScoringError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(ScoringError::Unavailable {
                reason: format!("scorer returned status {status}"),
            });
        }

        let body: ScoreResponse =
            response
                .json()
                .await
                .map_err(|e| ScoringError::MalformedResponse {
                    reason: format!("failed to decode score payload: {e}"),
                })?;

        if body.scores.len() != texts.len() {
            return Err(ScoringError::MalformedResponse {
                reason: format!(
                    "expected {} scores, got {}",
                    texts.len(),
                    body.scores.len()
                ),
            });
        }
        if let Some(score) = body.scores.iter().find(|s| !(0.0..=1.0).contains(*s)) {
            return Err(ScoringError::MalformedResponse {
                reason: format!("score {score} outside [0, 1]"),
            });
        }

        Ok(body.scores)
    }
}
