use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use sift::cache::SIFT_STATUS_HEADER;
use sift::comments::CommentError;
use sift::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("comment fetch failed: {0}")]
    CommentFetch(#[from] CommentError),

    #[error("comment endpoints are disabled: no API key configured")]
    CommentsDisabled,
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message, sift_status) = match &self {
            GatewayError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), "invalid_request")
            }
            GatewayError::Scoring(ScoringError::Unavailable { .. }) => (
                StatusCode::BAD_GATEWAY,
                self.to_string(),
                "scorer_unavailable",
            ),
            GatewayError::Scoring(ScoringError::Rejected { .. }) => {
                (StatusCode::BAD_GATEWAY, self.to_string(), "scorer_rejected")
            }
            GatewayError::Scoring(ScoringError::MalformedResponse { .. }) => (
                StatusCode::BAD_GATEWAY,
                self.to_string(),
                "scorer_malformed",
            ),
            GatewayError::CommentFetch(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string(), "comments_error")
            }
            GatewayError::CommentsDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                self.to_string(),
                "comments_disabled",
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SIFT_STATUS_HEADER,
            HeaderValue::from_str(sift_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
