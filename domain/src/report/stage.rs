//! Pipeline stages

use serde::{Deserialize, Serialize};

/// A stage of the report pipeline, reported to progress notifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Rewrite the entry into supportive paragraphs
    Reframing,
    /// Attach one image link to each paragraph
    Enrichment,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Reframing => "reframing",
            Stage::Enrichment => "enrichment",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
