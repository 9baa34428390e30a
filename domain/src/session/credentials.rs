//! API credentials held for the lifetime of a session

use thiserror::Error;

/// An API key.
///
/// `Debug` and `Display` never print the secret, so a key can travel
/// through logs and error messages safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, returning `None` for blank input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The secret itself, for building request headers
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("****")
    }
}

/// Which external service a credential belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// OpenAI key for both model stages
    TextGeneration,
    /// Giphy key for image search
    ImageSearch,
}

impl CredentialKind {
    pub fn service_name(&self) -> &'static str {
        match self {
            CredentialKind::TextGeneration => "OpenAI",
            CredentialKind::ImageSearch => "Giphy",
        }
    }

    /// Where the user can obtain a key
    pub fn signup_url(&self) -> &'static str {
        match self {
            CredentialKind::TextGeneration => "https://platform.openai.com/account/api-keys",
            CredentialKind::ImageSearch => "https://developers.giphy.com/dashboard/",
        }
    }
}

/// A required key has not been provided
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredential {
    #[error("Please provide your OpenAI API key")]
    TextGeneration,

    #[error("Please provide your Giphy API key")]
    ImageSearch,
}

impl MissingCredential {
    pub fn kind(&self) -> CredentialKind {
        match self {
            MissingCredential::TextGeneration => CredentialKind::TextGeneration,
            MissingCredential::ImageSearch => CredentialKind::ImageSearch,
        }
    }
}

/// Both keys, borrowed from a session after the presence check.
///
/// Ports that reach an external service take a key from here, so a call
/// cannot be made without passing [`Credentials::require`] first.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCredentials<'a> {
    pub text_generation: &'a ApiKey,
    pub image_search: &'a ApiKey,
}

/// The keys supplied so far in this session
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    text_generation: Option<ApiKey>,
    image_search: Option<ApiKey>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) a key. Blank input leaves the slot unchanged and
    /// returns `false`.
    pub fn set(&mut self, kind: CredentialKind, key: impl Into<String>) -> bool {
        let Some(key) = ApiKey::new(key) else {
            return false;
        };
        match kind {
            CredentialKind::TextGeneration => self.text_generation = Some(key),
            CredentialKind::ImageSearch => self.image_search = Some(key),
        }
        true
    }

    pub fn with(mut self, kind: CredentialKind, key: impl Into<String>) -> Self {
        self.set(kind, key);
        self
    }

    pub fn is_set(&self, kind: CredentialKind) -> bool {
        match kind {
            CredentialKind::TextGeneration => self.text_generation.is_some(),
            CredentialKind::ImageSearch => self.image_search.is_some(),
        }
    }

    pub fn clear(&mut self) {
        self.text_generation = None;
        self.image_search = None;
    }

    /// Check both keys are present, text generation first.
    pub fn require(&self) -> Result<ResolvedCredentials<'_>, MissingCredential> {
        let text_generation = self
            .text_generation
            .as_ref()
            .ok_or(MissingCredential::TextGeneration)?;
        let image_search = self
            .image_search
            .as_ref()
            .ok_or(MissingCredential::ImageSearch)?;
        Ok(ResolvedCredentials {
            text_generation,
            image_search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("sk-secret-123").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
        assert_eq!(key.to_string(), "****");
        assert_eq!(key.expose(), "sk-secret-123");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApiKey::new("   ").is_none());
        let mut creds = Credentials::new();
        assert!(!creds.set(CredentialKind::TextGeneration, ""));
        assert!(!creds.is_set(CredentialKind::TextGeneration));
    }

    #[test]
    fn test_require_checks_text_generation_first() {
        let creds = Credentials::new();
        assert_eq!(creds.require().unwrap_err(), MissingCredential::TextGeneration);

        let creds = Credentials::new().with(CredentialKind::ImageSearch, "giphy");
        assert_eq!(creds.require().unwrap_err(), MissingCredential::TextGeneration);
    }

    #[test]
    fn test_require_reports_missing_image_search() {
        let creds = Credentials::new().with(CredentialKind::TextGeneration, "sk");
        let err = creds.require().unwrap_err();
        assert_eq!(err, MissingCredential::ImageSearch);
        assert_eq!(err.kind(), CredentialKind::ImageSearch);
        assert_ne!(err.to_string(), MissingCredential::TextGeneration.to_string());
    }

    #[test]
    fn test_require_success() {
        let creds = Credentials::new()
            .with(CredentialKind::TextGeneration, "sk")
            .with(CredentialKind::ImageSearch, "gk");
        let resolved = creds.require().unwrap();
        assert_eq!(resolved.text_generation.expose(), "sk");
        assert_eq!(resolved.image_search.expose(), "gk");
    }

    #[test]
    fn test_clear() {
        let mut creds = Credentials::new().with(CredentialKind::TextGeneration, "sk");
        creds.clear();
        assert!(!creds.is_set(CredentialKind::TextGeneration));
    }
}
