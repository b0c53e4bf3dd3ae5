//! Video comment retrieval via the YouTube Data API v3.
//!
//! [`CommentFetcher`] walks the paginated `commentThreads` endpoint and
//! collects plain-text top-level comments. Replies are not fetched.

pub mod error;


pub use error::CommentError;

use serde::Deserialize;
use tracing::debug;

/// Base URL used when no override is configured.
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadPage {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Client for the `commentThreads` endpoint.
#[derive(Debug, Clone)]
pub struct CommentFetcher {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl CommentFetcher {
    /// Creates a fetcher against the public Google endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_YOUTUBE_API_URL)
    }

    /// Creates a fetcher against a custom base URL.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches up to `max_results` plain-text top-level comments for
    /// `video_id`, following `pageToken` pagination until enough comments are
    /// collected or pages run out.
    pub async fn fetch_comments(
        &self,
        video_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, CommentError> {
        let mut comments = Vec::new();
        if max_results == 0 {
            return Ok(comments);
        }

        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(video_id, page_token.as_deref()).await?;
            page_token = collect_page(&mut comments, page, max_results);
            if page_token.is_none() {
                break;
            }
        }

        debug!(video_id, count = comments.len(), "Fetched comments");
        Ok(comments)
    }

    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, CommentError> {
        let url = format!("{}/commentThreads", self.api_url);
        let mut request = self.client.get(&url).query(&[
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", "100"),
            ("textFormat", "plainText"),
            ("key", self.api_key.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CommentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CommentError::MalformedResponse {
                reason: e.to_string(),
            })
    }
}

/// Appends a page's comments to `comments`, stopping at `max_results`.
/// Returns the token for the next page when more comments are still wanted.
fn collect_page(
    comments: &mut Vec<String>,
    page: CommentThreadPage,
    max_results: usize,
) -> Option<String> {
    for item in page.items {
        comments.push(item.snippet.top_level_comment.snippet.text_display);
        if comments.len() >= max_results {
            return None;
        }
    }
    page.next_page_token
}
