/// Response header used to report request status.
pub const SIFT_STATUS_HEADER: &str = "X-Sift-Status";
/// Response header used to report cache outcome for a batch.
pub const SIFT_CACHE_HEADER: &str = "X-Sift-Cache";
/// Health value for status endpoints.
pub const SIFT_STATUS_HEALTHY: &str = "healthy";
/// Ready value for status endpoints.
pub const SIFT_STATUS_READY: &str = "ready";
/// Error value for status endpoints.
pub const SIFT_STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Cache outcome for one batch, used for response headers and metrics.
pub enum CacheOutcome {
    /// Every input resolved from the cache.
    Hit,
    /// Some inputs resolved from the cache, some required scoring.
    Partial,
    /// No input resolved from the cache.
    Miss,
}

impl CacheOutcome {
    /// Classifies a batch by its hit/miss index counts. An empty batch counts
    /// as a full hit (nothing was computed).
    #[inline]
    pub fn from_counts(hits: usize, misses: usize) -> Self {
        match (hits, misses) {
            (_, 0) => CacheOutcome::Hit,
            (0, _) => CacheOutcome::Miss,
            _ => CacheOutcome::Partial,
        }
    }

    #[inline]
    /// Returns a stable string suitable for the `X-Sift-Cache` header.
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheOutcome::Hit => "HIT",
            CacheOutcome::Partial => "PARTIAL",
            CacheOutcome::Miss => "MISS",
        }
    }

    #[inline]
    /// Returns `true` if at least one input resolved from the cache.
    pub fn is_hit(&self) -> bool {
        !matches!(self, CacheOutcome::Miss)
    }
}

impl std::fmt::Display for CacheOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
