//! Response tone value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The tone the supportive response should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseTone {
    #[default]
    Gentle,
    Encouraging,
    Soothing,
    Grounding,
}

impl ResponseTone {
    /// All tones in display order
    pub fn all() -> [ResponseTone; 4] {
        [
            ResponseTone::Gentle,
            ResponseTone::Encouraging,
            ResponseTone::Soothing,
            ResponseTone::Grounding,
        ]
    }

    /// Human-readable label, used verbatim in prompts
    pub fn label(&self) -> &'static str {
        match self {
            ResponseTone::Gentle => "Gentle and reassuring",
            ResponseTone::Encouraging => "Encouraging and uplifting",
            ResponseTone::Soothing => "Soothing and calm",
            ResponseTone::Grounding => "Neutral and grounding",
        }
    }

    /// Short identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseTone::Gentle => "gentle",
            ResponseTone::Encouraging => "encouraging",
            ResponseTone::Soothing => "soothing",
            ResponseTone::Grounding => "grounding",
        }
    }
}

impl std::fmt::Display for ResponseTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ResponseTone {
    type Err = DomainError;

    /// Accepts the short identifier, the full label, or a 1-based index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(index) = needle.parse::<usize>()
            && (1..=4).contains(&index)
        {
            return Ok(Self::all()[index - 1]);
        }
        Self::all()
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(needle) || t.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gentle() {
        assert_eq!(ResponseTone::default(), ResponseTone::Gentle);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "soothing".parse::<ResponseTone>().unwrap(),
            ResponseTone::Soothing
        );
        assert_eq!(
            "neutral and grounding".parse::<ResponseTone>().unwrap(),
            ResponseTone::Grounding
        );
        assert_eq!("2".parse::<ResponseTone>().unwrap(), ResponseTone::Encouraging);
        assert!("0".parse::<ResponseTone>().is_err());
        assert!("sarcastic".parse::<ResponseTone>().is_err());
    }
}
