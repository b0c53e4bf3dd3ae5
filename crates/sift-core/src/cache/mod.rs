//! Recency-ordered score cache.
//!
//! [`ScoreCache`] remembers previously computed toxicity scores under a fixed
//! entry budget, evicting the least-recently-used entry on overflow. Both
//! lookup and recency update are O(1): a key → slot map paired with an
//! intrusive doubly-linked recency list over a slab of nodes.

pub mod error;
mod lru;
pub mod types;

#[cfg(test)]
mod lru_tests;

pub use error::CacheError;
pub use lru::ScoreCache;
pub use types::{
    CacheOutcome, SIFT_CACHE_HEADER, SIFT_STATUS_ERROR, SIFT_STATUS_HEADER, SIFT_STATUS_HEALTHY,
    SIFT_STATUS_READY,
};
