//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation provider.

use async_trait::async_trait;
use relief_domain::{ApiKey, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer. The key is
/// passed per session so the adapter itself holds no secrets.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new conversation with the given system prompt
    async fn create_session_with_system_prompt(
        &self,
        api_key: &ApiKey,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM conversation
///
/// Each `send` appends the user turn and the assistant reply to the
/// session history, so later turns see earlier ones.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the assistant's text reply
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
