//! Application-level configuration.
//!
//! - [`GenerationParams`]: model and image-search bounds for a pipeline run

pub mod generation_params;

pub use generation_params::{DEFAULT_IMAGE_RESULT_LIMIT, GenerationParams};
