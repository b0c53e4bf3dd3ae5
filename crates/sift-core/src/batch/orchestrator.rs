use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::types::{BatchOutcome, Verdict};
use crate::cache::ScoreCache;
use crate::hashing::{hash_text, normalize_text};
use crate::scoring::{ScoringError, ToxicityScorer};

/// Resolves a batch of texts against the score cache, invoking the external
/// scorer at most once per call for the deduplicated misses.
///
/// Duplicate texts within a batch share one scorer entry and one cache write;
/// the computed score fans out to every index holding that text. On scorer
/// failure the whole call fails and no miss is written back (hits already
/// resolved were reads and stay valid).
///
/// Two concurrent calls missing on the same key may both invoke the scorer;
/// both then `set` the key and the later write wins. Scores are deterministic
/// per text, so the values are equal and this is harmless.
pub struct BatchOrchestrator<S: ToxicityScorer> {
    cache: Arc<ScoreCache>,
    scorer: S,
    default_threshold: f32,
}

impl<S: ToxicityScorer> BatchOrchestrator<S> {
    /// Creates an orchestrator over `cache` and `scorer`.
    ///
    /// `default_threshold` applies when a call carries no override; it is
    /// validated at configuration time, not here.
    pub fn new(cache: Arc<ScoreCache>, scorer: S, default_threshold: f32) -> Self {
        Self {
            cache,
            scorer,
            default_threshold,
        }
    }

    /// Returns the shared score cache.
    pub fn cache(&self) -> &Arc<ScoreCache> {
        &self.cache
    }

    /// Returns the process-wide default decision threshold.
    #[inline]
    pub fn default_threshold(&self) -> f32 {
        self.default_threshold
    }

    /// Scores `texts` in input order, consulting the cache first.
    ///
    /// Returns one [`Verdict`] per input, same order. An empty batch returns
    /// an empty outcome without touching the scorer.
    #[instrument(skip(self, texts), fields(batch_size = texts.len()))]
    pub async fn score_batch(
        &self,
        texts: &[String],
        threshold: Option<f32>,
    ) -> Result<BatchOutcome, ScoringError> {
        let threshold = threshold.unwrap_or(self.default_threshold);

        if texts.is_empty() {
            return Ok(BatchOutcome::empty());
        }

        // One slot per input index; hits fill theirs immediately, miss slots
        // are filled after the scorer call.
        let mut scores = vec![0.0_f32; texts.len()];
        let mut miss_keys: Vec<[u8; 32]> = Vec::new();
        let mut miss_texts: Vec<String> = Vec::new();
        let mut miss_slots: HashMap<[u8; 32], Vec<usize>> = HashMap::new();
        let mut hits = 0_usize;

        for (i, text) in texts.iter().enumerate() {
            let normalized = normalize_text(text);
            let key = hash_text(&normalized);

            if let Some(score) = self.cache.get(&key) {
                scores[i] = score;
                hits += 1;
                continue;
            }

            match miss_slots.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(vec![i]);
                    miss_keys.push(key);
                    miss_texts.push(normalized);
                }
                Entry::Occupied(mut slot) => {
                    slot.get_mut().push(i);
                }
            }
        }

        let misses = texts.len() - hits;

        if !miss_texts.is_empty() {
            debug!(
                unique_misses = miss_texts.len(),
                total_misses = misses,
                hits,
                "Scoring cache misses"
            );

            let fresh = self.scorer.score(&miss_texts).await?;
            if fresh.len() != miss_texts.len() {
                return Err(ScoringError::MalformedResponse {
                    reason: format!(
                        "expected {} scores, got {}",
                        miss_texts.len(),
                        fresh.len()
                    ),
                });
            }

            // No await below this point: writeback completes as a unit, so a
            // cancelled call never leaves half the batch cached.
            for (key, score) in miss_keys.iter().zip(fresh) {
                self.cache.set(*key, score);
                if let Some(indices) = miss_slots.get(key) {
                    for &i in indices {
                        scores[i] = score;
                    }
                }
            }
        } else {
            debug!(hits, "Batch fully served from cache");
        }

        let verdicts = scores
            .into_iter()
            .map(|score| Verdict {
                score,
                flagged: score >= threshold,
            })
            .collect();

        Ok(BatchOutcome {
            verdicts,
            hits,
            misses,
        })
    }
}

impl<S: ToxicityScorer> std::fmt::Debug for BatchOrchestrator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("cache", &self.cache)
            .field("default_threshold", &self.default_threshold)
            .finish()
    }
}
