use std::sync::Arc;

use sift::batch::BatchOrchestrator;
use sift::comments::CommentFetcher;
use sift::scoring::ToxicityScorer;

/// Shared state for all gateway handlers.
///
/// The orchestrator (and the cache inside it) is constructed once at startup
/// and injected here; handlers never reach for ambient globals.
pub struct HandlerState<S: ToxicityScorer + 'static> {
    pub orchestrator: Arc<BatchOrchestrator<S>>,

    /// `None` when no comment API key is configured; the comment endpoints
    /// then answer 503.
    pub fetcher: Option<Arc<CommentFetcher>>,

    /// Default comment count per video when a request carries none.
    pub max_comments: usize,
}

impl<S: ToxicityScorer + 'static> HandlerState<S> {
    pub fn new(
        orchestrator: Arc<BatchOrchestrator<S>>,
        fetcher: Option<Arc<CommentFetcher>>,
        max_comments: usize,
    ) -> Self {
        Self {
            orchestrator,
            fetcher,
            max_comments,
        }
    }
}

impl<S: ToxicityScorer + 'static> Clone for HandlerState<S> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            fetcher: self.fetcher.clone(),
            max_comments: self.max_comments,
        }
    }
}
