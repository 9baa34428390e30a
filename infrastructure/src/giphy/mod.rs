//! Giphy image search provider

mod client;
mod types;

pub use client::{DEFAULT_GIPHY_BASE_URL, DEFAULT_RATING, GiphyImageSearch, VALID_RATINGS};
