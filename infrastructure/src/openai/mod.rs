//! OpenAI Chat Completions provider
//!
//! Both pipeline stages talk to the model through this adapter. Requests
//! carry the session's key as a bearer token.

pub mod error;
mod gateway;
mod session;
mod types;

pub use error::OpenAiError;
pub use gateway::{DEFAULT_OPENAI_BASE_URL, OpenAiGateway};
pub use session::OpenAiSession;
