use crate::cache::CacheOutcome;

/// Per-input classification outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Toxicity probability in `[0, 1]`.
    pub score: f32,
    /// `score >= threshold` for the threshold in effect for the call.
    pub flagged: bool,
}

/// Ordered verdicts plus cache accounting for one batch call.
///
/// `verdicts` has the same length and index correspondence as the input
/// batch. `hits` and `misses` count inputs (not unique keys) and always sum
/// to the batch length.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub verdicts: Vec<Verdict>,
    pub hits: usize,
    pub misses: usize,
}

impl BatchOutcome {
    /// An outcome for the empty batch.
    pub fn empty() -> Self {
        Self {
            verdicts: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Classifies this batch for the `X-Sift-Cache` header.
    #[inline]
    pub fn cache_outcome(&self) -> CacheOutcome {
        CacheOutcome::from_counts(self.hits, self.misses)
    }
}
