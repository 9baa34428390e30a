//! Giphy search adapter
//!
//! Implements [`ImageSearchPort`] against the Giphy `gifs/search`
//! endpoint. The key travels as the `api_key` query parameter, so URLs
//! are stripped from transport errors before they reach logs.

use super::types::SearchResponse;
use async_trait::async_trait;
use relief_application::ports::image_search::{ImageSearchError, ImageSearchPort};
use relief_domain::{ApiKey, ImageCandidate};
use tracing::debug;

/// Default API root
pub const DEFAULT_GIPHY_BASE_URL: &str = "https://api.giphy.com";

/// Content rating applied when none is configured
pub const DEFAULT_RATING: &str = "g";

/// Ratings accepted by the search endpoint
pub const VALID_RATINGS: &[&str] = &["g", "pg", "pg-13", "r"];

pub struct GiphyImageSearch {
    client: reqwest::Client,
    endpoint: String,
    rating: String,
}

impl GiphyImageSearch {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEFAULT_GIPHY_BASE_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/v1/gifs/search", base_url.trim_end_matches('/')),
            rating: DEFAULT_RATING.to_string(),
        }
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_status(status: u16, body: &str) -> ImageSearchError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["meta"]["msg"].as_str().or(v["message"].as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());
    match status {
        401 | 403 => ImageSearchError::Authentication(message),
        _ => ImageSearchError::RequestFailed { status, message },
    }
}

#[async_trait]
impl ImageSearchPort for GiphyImageSearch {
    async fn search(
        &self,
        api_key: &ApiKey,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ImageCandidate>, ImageSearchError> {
        debug!(query, limit, "Searching Giphy");

        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("api_key", api_key.expose()),
                ("q", query),
                ("limit", limit_param.as_str()),
                ("rating", self.rating.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ImageSearchError::ConnectionError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status.as_u16(), &body));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::MalformedResponse(e.without_url().to_string()))?;

        let candidates = body.into_candidates(limit);
        debug!(results = candidates.len(), "Giphy search complete");
        Ok(candidates)
    }
}
