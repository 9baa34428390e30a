//! Infrastructure layer for stress-relief
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod giphy;
pub mod http;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, DEFAULT_REPORT_FILE, FileConfig, FileOutputConfig, FileOutputFormat};
pub use giphy::GiphyImageSearch;
pub use http::build_http_client;
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiGateway};
