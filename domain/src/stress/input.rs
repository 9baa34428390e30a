//! Stress input entity

use super::{ResponseTone, StressCategory};
use serde::{Deserialize, Serialize};

/// One submission: the user's free text plus their two selections.
///
/// Immutable once built. The text is passed to the model as-is; no
/// length or content validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressInput {
    free_text: String,
    category: StressCategory,
    tone: ResponseTone,
}

impl StressInput {
    pub fn new(
        free_text: impl Into<String>,
        category: StressCategory,
        tone: ResponseTone,
    ) -> Self {
        Self {
            free_text: free_text.into(),
            category,
            tone,
        }
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn category(&self) -> StressCategory {
        self.category
    }

    pub fn tone(&self) -> ResponseTone {
        self.tone
    }

    /// True when the entry has no visible text
    pub fn is_blank(&self) -> bool {
        self.free_text.trim().is_empty()
    }
}
