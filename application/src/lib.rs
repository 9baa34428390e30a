//! Application layer for stress-relief
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_IMAGE_RESULT_LIMIT, GenerationParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    image_search::{ImageSearchError, ImageSearchPort},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::enrich::{EnrichError, EnrichParagraphUseCase};
pub use use_cases::generate_report::{GenerateReportError, GenerateReportUseCase};
pub use use_cases::reframe::{ReframeError, ReframeUseCase};
