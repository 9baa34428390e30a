//! Generation parameters: per-run knobs for the report pipeline.

use relief_domain::{MAX_PARAGRAPHS, Model};
use serde::{Deserialize, Serialize};

/// Default number of image-search results offered to the model
pub const DEFAULT_IMAGE_RESULT_LIMIT: usize = 5;

/// Parameters shared by both stages of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Text-generation model for both stages.
    pub model: Model,
    /// Maximum image-search results per paragraph.
    pub image_result_limit: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            image_result_limit: DEFAULT_IMAGE_RESULT_LIMIT,
        }
    }
}

impl GenerationParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Set the result limit; zero is raised to one.
    pub fn with_image_result_limit(mut self, limit: usize) -> Self {
        self.image_result_limit = limit.max(1);
        self
    }

    /// Paragraph cap applied to reframing output
    pub fn max_paragraphs(&self) -> usize {
        MAX_PARAGRAPHS
    }
}
