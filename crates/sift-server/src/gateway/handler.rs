use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    CheckRequest, CheckResponse, CommentVerdict, CommentsQuery, CommentsResponse, TextVerdict,
    VideoCheckRequest, VideoCheckResponse,
};
use crate::gateway::state::HandlerState;
use sift::batch::BatchOutcome;
use sift::cache::SIFT_CACHE_HEADER;
use sift::comments::CommentFetcher;
use sift::scoring::ToxicityScorer;

/// `POST /v1/check` - classify a batch of texts in request order.
#[instrument(skip(state, request), fields(batch_size = request.texts.len()))]
pub async fn check_handler<S>(
    State(state): State<HandlerState<S>>,
    Json(request): Json<CheckRequest>,
) -> Result<Response, GatewayError>
where
    S: ToxicityScorer + 'static,
{
    let threshold = validate_threshold(request.threshold)?;

    let outcome = state
        .orchestrator
        .score_batch(&request.texts, threshold)
        .await?;

    info!(
        hits = outcome.hits,
        misses = outcome.misses,
        cache = %outcome.cache_outcome(),
        "Batch classified"
    );

    let results = outcome
        .verdicts
        .iter()
        .map(|v| TextVerdict {
            hateful: v.flagged,
            score: v.score,
        })
        .collect();

    Ok((
        StatusCode::OK,
        cache_headers(&outcome),
        Json(CheckResponse { results }),
    )
        .into_response())
}

/// `GET /v1/comments/{video_id}` - fetch plain-text top-level comments.
#[instrument(skip(state))]
pub async fn comments_handler<S>(
    State(state): State<HandlerState<S>>,
    Path(video_id): Path<String>,
    Query(query): Query<CommentsQuery>,
) -> Result<Response, GatewayError>
where
    S: ToxicityScorer + 'static,
{
    let fetcher = comment_fetcher(&state)?;
    let max_results = query.max_results.unwrap_or(state.max_comments);

    let comments = fetcher.fetch_comments(&video_id, max_results).await?;

    Ok((StatusCode::OK, Json(CommentsResponse { comments })).into_response())
}

/// `POST /v1/comments/{video_id}/check` - fetch comments and classify them in
/// one round trip.
#[instrument(skip(state, request))]
pub async fn comments_check_handler<S>(
    State(state): State<HandlerState<S>>,
    Path(video_id): Path<String>,
    Json(request): Json<VideoCheckRequest>,
) -> Result<Response, GatewayError>
where
    S: ToxicityScorer + 'static,
{
    let fetcher = comment_fetcher(&state)?;
    let threshold = validate_threshold(request.threshold)?;
    let max_results = request.max_results.unwrap_or(state.max_comments);

    let comments = fetcher.fetch_comments(&video_id, max_results).await?;
    let outcome = state.orchestrator.score_batch(&comments, threshold).await?;

    info!(
        video_id = %video_id,
        comments = comments.len(),
        hits = outcome.hits,
        misses = outcome.misses,
        "Video comments classified"
    );

    let results = comments
        .into_iter()
        .zip(outcome.verdicts.iter())
        .map(|(text, v)| CommentVerdict {
            text,
            hateful: v.flagged,
            score: v.score,
        })
        .collect();

    Ok((
        StatusCode::OK,
        cache_headers(&outcome),
        Json(VideoCheckResponse { results }),
    )
        .into_response())
}

fn comment_fetcher<S>(
    state: &HandlerState<S>,
) -> Result<std::sync::Arc<CommentFetcher>, GatewayError>
where
    S: ToxicityScorer + 'static,
{
    state
        .fetcher
        .as_ref()
        .cloned()
        .ok_or(GatewayError::CommentsDisabled)
}

fn validate_threshold(threshold: Option<f32>) -> Result<Option<f32>, GatewayError> {
    if let Some(value) = threshold {
        if !(0.0..=1.0).contains(&value) {
            return Err(GatewayError::InvalidRequest(format!(
                "threshold {value} outside [0, 1]"
            )));
        }
    }
    Ok(threshold)
}

fn cache_headers(outcome: &BatchOutcome) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        SIFT_CACHE_HEADER,
        HeaderValue::from_static(outcome.cache_outcome().as_header_value()),
    );
    headers
}
