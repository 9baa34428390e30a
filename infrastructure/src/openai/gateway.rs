//! OpenAI LLM Gateway implementation

use super::session::{CompletionSettings, OpenAiSession};
use async_trait::async_trait;
use relief_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use relief_domain::{ApiKey, Model};
use std::sync::Arc;
use tracing::debug;

/// Default API root
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// LLM Gateway implementation for the OpenAI Chat Completions API
///
/// Holds no credentials: each session is opened with the caller's key.
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: Arc<str>,
    settings: CompletionSettings,
}

impl OpenAiGateway {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEFAULT_OPENAI_BASE_URL)
    }

    /// Create a gateway against another API root (proxies, compatible servers)
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: chat_endpoint(base_url).into(),
            settings: CompletionSettings::default(),
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.settings.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.settings.max_tokens = max_tokens;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        api_key: &ApiKey,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        debug!(
            model = %model,
            system_prompt_len = system_prompt.len(),
            "Opening OpenAI session"
        );
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            Arc::clone(&self.endpoint),
            api_key.clone(),
            model.clone(),
            system_prompt,
            self.settings.clone(),
        )))
    }
}
