use serde::{Deserialize, Serialize};

/// Body for `POST /v1/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub texts: Vec<String>,
    /// Per-call decision threshold; falls back to the configured default.
    #[serde(default)]
    pub threshold: Option<f32>,
}

/// One classification result, aligned by index with the request texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextVerdict {
    pub hateful: bool,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub results: Vec<TextVerdict>,
}

/// Query for `GET /v1/comments/{video_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsQuery {
    #[serde(default)]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<String>,
}

/// Body for `POST /v1/comments/{video_id}/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoCheckRequest {
    #[serde(default)]
    pub threshold: Option<f32>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// One classified comment, in fetch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentVerdict {
    pub text: String,
    pub hateful: bool,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCheckResponse {
    pub results: Vec<CommentVerdict>,
}
