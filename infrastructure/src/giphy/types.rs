//! Giphy search response types

use relief_domain::ImageCandidate;
use serde::Deserialize;

/// `GET /v1/gifs/search` response body (only the fields used)
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Gif>,
}

#[derive(Debug, Deserialize)]
pub struct Gif {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Page URL on giphy.com
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

#[derive(Debug, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub original: Option<Rendition>,
}

#[derive(Debug, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub url: Option<String>,
}

impl Gif {
    /// Convert to a candidate, preferring the direct media URL over the
    /// page URL. Entries with neither are dropped.
    pub fn into_candidate(self) -> Option<ImageCandidate> {
        let media = self
            .images
            .and_then(|i| i.original)
            .and_then(|r| r.url)
            .filter(|u| !u.is_empty());
        let url = media.or(self.url.filter(|u| !u.is_empty()))?;
        Some(ImageCandidate::new(self.id, self.title, url))
    }
}

impl SearchResponse {
    pub fn into_candidates(self, limit: usize) -> Vec<ImageCandidate> {
        self.data
            .into_iter()
            .filter_map(Gif::into_candidate)
            .take(limit)
            .collect()
    }
}
