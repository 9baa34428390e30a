//! Stress category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The kind of stress the user is currently facing.
///
/// The set is closed: prompts match on it exhaustively, so adding a
/// variant forces every prompt site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressCategory {
    #[default]
    Work,
    Relationship,
    Health,
    DecisionFatigue,
    Loneliness,
    Unspecified,
}

impl StressCategory {
    /// All categories in display order
    pub fn all() -> [StressCategory; 6] {
        [
            StressCategory::Work,
            StressCategory::Relationship,
            StressCategory::Health,
            StressCategory::DecisionFatigue,
            StressCategory::Loneliness,
            StressCategory::Unspecified,
        ]
    }

    /// Human-readable label, used verbatim in prompts
    pub fn label(&self) -> &'static str {
        match self {
            StressCategory::Work => "Work or performance pressure",
            StressCategory::Relationship => "Relationship or emotional conflict",
            StressCategory::Health => "Health-related anxiety",
            StressCategory::DecisionFatigue => "Decision fatigue or overwhelm",
            StressCategory::Loneliness => "Loneliness or isolation",
            StressCategory::Unspecified => "No specific category",
        }
    }

    /// Short identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            StressCategory::Work => "work",
            StressCategory::Relationship => "relationship",
            StressCategory::Health => "health",
            StressCategory::DecisionFatigue => "decision-fatigue",
            StressCategory::Loneliness => "loneliness",
            StressCategory::Unspecified => "none",
        }
    }
}

impl std::fmt::Display for StressCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for StressCategory {
    type Err = DomainError;

    /// Accepts the short identifier, the full label, or a 1-based index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(index) = needle.parse::<usize>()
            && (1..=6).contains(&index)
        {
            return Ok(Self::all()[index - 1]);
        }
        Self::all()
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
