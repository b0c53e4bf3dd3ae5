//! Sift library crate (used by the server and integration tests).
//!
//! Batch toxicity scoring behind a recency-ordered cache. The expensive part
//! of classifying comments is the model call; sift amortizes it by resolving
//! each batch against an LRU score cache and invoking the scorer once for the
//! deduplicated misses.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`ScoreCache`], [`CacheError`], [`CacheOutcome`] - Recency cache
//! - [`BatchOrchestrator`], [`BatchOutcome`], [`Verdict`] - Batch orchestration
//! - [`ToxicityScorer`], [`HttpScorer`], [`ScoringError`] - Scorer capability
//! - [`CommentFetcher`], [`CommentError`] - Video comment retrieval
//! - Hashing helpers for cache keys
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod cache;
pub mod comments;
pub mod config;
pub mod hashing;
pub mod scoring;

pub use batch::{BatchOrchestrator, BatchOutcome, Verdict};
pub use cache::{
    CacheError, CacheOutcome, SIFT_CACHE_HEADER, SIFT_STATUS_ERROR, SIFT_STATUS_HEADER,
    SIFT_STATUS_HEALTHY, SIFT_STATUS_READY, ScoreCache,
};
pub use comments::{CommentError, CommentFetcher, DEFAULT_YOUTUBE_API_URL};
pub use config::{Config, ConfigError, DEFAULT_SCORER_URL, DEFAULT_THRESHOLD};
pub use hashing::{hash_text, key_for, normalize_text};
#[cfg(any(test, feature = "mock"))]
pub use scoring::{MockFailure, MockScorer};
pub use scoring::{HttpScorer, ScoringError, ToxicityScorer};
