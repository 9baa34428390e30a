//! Domain error types

use crate::parsing::ParseError;
use crate::session::credentials::MissingCredential;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    MissingCredential(#[from] MissingCredential),

    #[error("Malformed model output: {0}")]
    MalformedOutput(#[from] ParseError),

    #[error("Unknown stress category: {0}")]
    UnknownCategory(String),

    #[error("Unknown response tone: {0}")]
    UnknownTone(String),
}

impl DomainError {
    /// Check if this error was raised before any external call was made
    pub fn is_local(&self) -> bool {
        !matches!(self, DomainError::MalformedOutput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let error = DomainError::from(MissingCredential::ImageSearch);
        assert!(error.to_string().contains("Giphy"));
    }

    #[test]
    fn test_is_local_check() {
        assert!(DomainError::UnknownTone("loud".to_string()).is_local());
        assert!(DomainError::from(MissingCredential::TextGeneration).is_local());
        assert!(!DomainError::from(ParseError::NoParagraphs).is_local());
    }
}
