//! Domain layer for stress-relief
//!
//! This crate contains the core entities, value objects, prompt templates
//! and model-output parsing. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-stage pipeline
//!
//! - **Reframing**: the user's entry becomes up to five supportive paragraphs
//! - **Enrichment**: each paragraph gets one calming image link
//!
//! ## Session
//!
//! A [`ReliefSession`] holds the two API keys and the last finished
//! [`Report`] for one user. It is passed explicitly to the pipeline.

pub mod config;
pub mod core;
pub mod parsing;
pub mod prompt;
pub mod report;
pub mod session;
pub mod stress;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model};
pub use parsing::{ParseError, extract_image_url, extract_search_query, split_paragraphs};
pub use prompt::{EnrichPromptTemplate, ReframePromptTemplate};
pub use report::{
    ImageCandidate, ImageReference, MAX_PARAGRAPHS, Paragraph, Report, ReportBlock, Stage,
};
pub use session::{
    ApiKey, CredentialKind, Credentials, MissingCredential, ReliefSession, ResolvedCredentials,
};
pub use stress::{ResponseTone, StressCategory, StressInput};
