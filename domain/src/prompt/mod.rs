//! Prompt domain
//!
//! Templates for the two model stages: reframing the user's entry into
//! supportive paragraphs, and choosing a calming image for each paragraph.

mod enrich;
mod reframe;

pub use enrich::EnrichPromptTemplate;
pub use reframe::ReframePromptTemplate;
