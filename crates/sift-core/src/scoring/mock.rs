use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::ToxicityScorer;
use super::error::ScoringError;
use crate::hashing::hash_text;

/// Failure mode a [`MockScorer`] can be armed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Fail as if the scorer were unreachable.
    Unavailable,
    /// Fail as if the scorer rejected the batch.
    Rejected,
    /// Answer with one score too few (contract violation).
    ShortResponse,
}

#[derive(Default, Clone)]
/// In-memory scorer for tests: deterministic scores, recorded invocations.
///
/// Unseeded texts score a stable pseudo-probability derived from their hash,
/// so identical batches always produce identical results.
pub struct MockScorer {
    preset: Arc<RwLock<HashMap<String, f32>>>,
    calls: Arc<RwLock<Vec<Vec<String>>>>,
    failure: Arc<RwLock<Option<MockFailure>>>,
}

impl MockScorer {
    /// Creates a mock with no preset scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a fixed score for `text` (builder style).
    pub fn with_score(self, text: &str, score: f32) -> Self {
        self.preset.write().insert(text.to_string(), score);
        self
    }

    /// Arms the next and all following calls with `failure`.
    pub fn fail_with(&self, failure: MockFailure) {
        *self.failure.write() = Some(failure);
    }

    /// Clears any armed failure.
    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    /// Returns how many times `score` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }

    /// Returns every batch submitted so far, in invocation order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().clone()
    }

    /// Returns the score this mock produces for `text`.
    pub fn score_for(&self, text: &str) -> f32 {
        if let Some(score) = self.preset.read().get(text) {
            return *score;
        }
        f32::from(hash_text(text)[0]) / 255.0
    }
}

impl ToxicityScorer for MockScorer {
    async fn score(&self, texts: &[String]) -> Result<Vec<f32>, ScoringError> {
        self.calls.write().push(texts.to_vec());

        match *self.failure.read() {
            Some(MockFailure::Unavailable) => {
                return Err(ScoringError::Unavailable {
                    reason: "mock scorer down".to_string(),
                });
            }
            Some(MockFailure::Rejected) => {
                return Err(ScoringError::Rejected {
                    status: 422,
                    message: "mock scorer rejected batch".to_string(),
                });
            }
            Some(MockFailure::ShortResponse) => {
                let n = texts.len().saturating_sub(1);
                return Ok(texts[..n].iter().map(|t| self.score_for(t)).collect());
            }
            None => {}
        }

        Ok(texts.iter().map(|t| self.score_for(t)).collect())
    }
}

impl std::fmt::Debug for MockScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockScorer")
            .field("calls", &self.call_count())
            .finish()
    }
}
