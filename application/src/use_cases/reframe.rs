//! Reframe use case.
//!
//! Runs the first model stage: the user's entry, category and tone go in,
//! up to [`MAX_PARAGRAPHS`](relief_domain::MAX_PARAGRAPHS) supportive
//! paragraphs come out.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use relief_domain::util::preview;
use relief_domain::{
    ApiKey, Paragraph, ParseError, ReframePromptTemplate, StressInput, split_paragraphs,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during the reframing stage.
#[derive(Error, Debug)]
pub enum ReframeError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Unusable reframing output: {0}")]
    ParseError(#[from] ParseError),
}

/// Use case for the reframing stage.
pub struct ReframeUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for ReframeUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl ReframeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Ask the model for supportive paragraphs and split its answer.
    pub async fn execute(
        &self,
        api_key: &ApiKey,
        input: &StressInput,
        params: &GenerationParams,
    ) -> Result<Vec<Paragraph>, ReframeError> {
        info!(
            "Reframing entry ({} / {}): {}",
            input.category().as_str(),
            input.tone().as_str(),
            preview(input.free_text(), 80)
        );

        let system_prompt = ReframePromptTemplate::system(input.category(), input.tone());
        let prompt = ReframePromptTemplate::user(input);

        let session = self
            .gateway
            .create_session_with_system_prompt(api_key, &params.model, &system_prompt)
            .await?;

        debug!(
            "Reframe: model {}, prompt {} bytes",
            session.model(),
            prompt.len()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "llm_request",
            serde_json::json!({
                "stage": "reframing",
                "model": params.model.as_str(),
                "system_prompt": system_prompt,
                "prompt": prompt,
            }),
        ));

        let response = session.send(&prompt).await?;

        self.conversation_logger.log(ConversationEvent::new(
            "llm_response",
            serde_json::json!({
                "stage": "reframing",
                "bytes": response.len(),
                "text": response,
            }),
        ));

        let paragraphs = split_paragraphs(&response, params.max_paragraphs())?;
        info!("Reframe produced {} paragraph(s)", paragraphs.len());
        Ok(paragraphs)
    }
}
