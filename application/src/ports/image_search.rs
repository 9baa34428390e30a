//! Image search port
//!
//! Defines the interface for the animated-image search service used by
//! the enrichment stage.

use async_trait::async_trait;
use relief_domain::{ApiKey, ImageCandidate};
use thiserror::Error;

/// Errors from the image search service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSearchError {
    #[error("Image search authentication failed: {0}")]
    Authentication(String),

    #[error("Image search connection error: {0}")]
    ConnectionError(String),

    #[error("Image search request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed image search response: {0}")]
    MalformedResponse(String),
}

/// Search for animated images matching a short query
#[async_trait]
pub trait ImageSearchPort: Send + Sync {
    /// Return at most `limit` results, best match first. An empty list is
    /// a valid answer.
    async fn search(
        &self,
        api_key: &ApiKey,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ImageCandidate>, ImageSearchError>;
}
