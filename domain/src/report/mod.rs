//! Report building blocks.
//!
//! A report is the ordered list of supportive paragraphs produced by the
//! reframing stage, each paired with the image link chosen for it by the
//! enrichment stage.

pub mod entities;
pub mod stage;

pub use entities::{ImageCandidate, ImageReference, Paragraph, Report, ReportBlock};
pub use stage::Stage;

/// Upper bound on the number of paragraphs kept from the reframing stage
pub const MAX_PARAGRAPHS: usize = 5;
