//! Error types for the OpenAI adapter

use relief_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to the Chat Completions API
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response contained no choices")]
    NoChoices,
}

impl OpenAiError {
    /// Wrap a transport error, dropping the request URL from its message.
    pub fn transport(err: reqwest::Error) -> Self {
        OpenAiError::Transport(err.without_url())
    }
}

/// Pull a readable message out of an OpenAI error body.
///
/// The API answers with `{"error": {"message": ...}}`; anything else is
/// returned trimmed.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Status { status, message } => match status {
                401 | 403 => GatewayError::Authentication(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed { status, message },
            },
            OpenAiError::Decode(msg) => GatewayError::MalformedResponse(msg),
            OpenAiError::NoChoices => GatewayError::EmptyResponse,
        }
    }
}
