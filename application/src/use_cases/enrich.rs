//! Enrich paragraph use case.
//!
//! Attaches one calming image to one paragraph:
//! 1. Ask the model for a short search phrase
//! 2. Run a single image search with that phrase
//! 3. Ask the model, in the same conversation, to pick one result
//! 4. Parse the URL out of its reply
//!
//! Every paragraph gets a fresh model session, so paragraphs never see
//! each other's conversation.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::image_search::{ImageSearchError, ImageSearchPort};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use relief_domain::util::preview;
use relief_domain::{
    EnrichPromptTemplate, Paragraph, ParseError, ReportBlock, ResolvedCredentials, ResponseTone,
    extract_image_url, extract_search_query,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while enriching one paragraph.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error(transparent)]
    ImageSearch(#[from] ImageSearchError),

    #[error("Unusable enrichment output: {0}")]
    ParseError(#[from] ParseError),

    #[error("Image search returned no results for '{query}'")]
    NoImageResults { query: String },
}

/// Use case for enriching a single paragraph with an image link.
pub struct EnrichParagraphUseCase {
    gateway: Arc<dyn LlmGateway>,
    image_search: Arc<dyn ImageSearchPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for EnrichParagraphUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            image_search: self.image_search.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl EnrichParagraphUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, image_search: Arc<dyn ImageSearchPort>) -> Self {
        Self {
            gateway,
            image_search,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Enrich the paragraph at position `index` (0-based, used for progress).
    pub async fn execute(
        &self,
        credentials: ResolvedCredentials<'_>,
        index: usize,
        paragraph: &Paragraph,
        tone: ResponseTone,
        params: &GenerationParams,
        progress: &dyn ProgressNotifier,
    ) -> Result<ReportBlock, EnrichError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(
                credentials.text_generation,
                &params.model,
                &EnrichPromptTemplate::system(),
            )
            .await?;

        // Turn 1: search phrase
        let query_prompt = EnrichPromptTemplate::query(paragraph, tone);
        let query_reply = session.send(&query_prompt).await?;
        let query = extract_search_query(&query_reply)?;
        debug!("Enrich: query '{}' for '{}'", query, preview(paragraph.text(), 60));
        progress.on_search_query(index, &query);

        // Single image search
        let candidates = self
            .image_search
            .search(credentials.image_search, &query, params.image_result_limit)
            .await?;

        self.conversation_logger.log(ConversationEvent::new(
            "image_search",
            serde_json::json!({
                "paragraph": paragraph.text(),
                "query": query,
                "results": candidates.iter().map(|c| &c.url).collect::<Vec<_>>(),
            }),
        ));

        if candidates.is_empty() {
            warn!("Image search returned nothing for '{}'", query);
            return Err(EnrichError::NoImageResults { query });
        }

        // Turn 2: selection
        let selection_reply = session
            .send(&EnrichPromptTemplate::selection(&candidates))
            .await?;
        let image = extract_image_url(&selection_reply)?;

        if !candidates.iter().any(|c| c.url == image.url()) {
            debug!("Selected URL is not one of the search results: {}", image.url());
        }

        self.conversation_logger.log(ConversationEvent::new(
            "image_selected",
            serde_json::json!({
                "query": query,
                "url": image.url(),
            }),
        ));
        info!("Enriched paragraph with {}", image.url());

        Ok(ReportBlock::new(paragraph.clone(), image))
    }
}
