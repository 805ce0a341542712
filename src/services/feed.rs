//! HTTP client for the remote posts API.
//!
//! The API is an opaque external collaborator; this client only speaks
//! its documented wire shape (GET/POST `/posts`) and applies no retry
//! policy — a failed request surfaces as a typed error and the caller
//! decides what to do.

use crate::error::ClientError;
use crate::models::{Channel, NewPost, Post};

/// Client for the remote posts API.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Create a client for the given API base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch all posts.
    ///
    /// The API returns a bare JSON array; anything else (including an
    /// error object with a 200 status) is rejected as an invalid
    /// response rather than silently treated as an empty feed.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        let url = format!("{}/posts", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::InvalidResponse(format!(
                "GET /posts returned {}",
                status
            )));
        }

        let body: serde_json::Value = response.json().await?;
        if !body.is_array() {
            return Err(ClientError::InvalidResponse(
                "expected an array of posts".to_string(),
            ));
        }

        serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("malformed post in feed: {e}")))
    }

    /// Submit a new post and return the stored post as echoed by the
    /// server (with its assigned id).
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError> {
        let url = format!("{}/posts", self.base_url);
        let response = self.http.post(&url).json(post).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::InvalidResponse(format!(
                "POST /posts returned {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("malformed created post: {e}")))
    }
}

/// Filter a feed down to one channel, oldest first.
pub fn posts_for_channel(posts: &[Post], channel: Channel) -> Vec<&Post> {
    let mut filtered: Vec<&Post> = posts.iter().filter(|p| p.in_channel(channel)).collect();
    filtered.sort_by_key(|p| p.timestamp);
    filtered
}
