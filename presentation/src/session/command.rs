//! Slash commands of the interactive session

use relief_domain::{CredentialKind, DomainError, ResponseTone, StressCategory};
use std::path::PathBuf;
use thiserror::Error;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/key openai|giphy <KEY>`
    Key { kind: CredentialKind, key: String },
    /// `/category <id|label|number>`
    Category(StressCategory),
    /// `/tone <id|label|number>`
    Tone(ResponseTone),
    ListCategories,
    ListTones,
    Generate,
    Show,
    /// `/save [PATH]`
    Save(Option<PathBuf>),
    /// Forget the entry text typed so far
    Clear,
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/key" => {
                let (service, key) = rest
                    .split_once(char::is_whitespace)
                    .map(|(s, k)| (s, k.trim()))
                    .ok_or(CommandError::Usage("/key openai|giphy <KEY>"))?;
                let kind = match service.to_lowercase().as_str() {
                    "openai" => CredentialKind::TextGeneration,
                    "giphy" => CredentialKind::ImageSearch,
                    _ => return Err(CommandError::Usage("/key openai|giphy <KEY>")),
                };
                if key.is_empty() {
                    return Err(CommandError::Usage("/key openai|giphy <KEY>"));
                }
                Ok(ReplCommand::Key {
                    kind,
                    key: key.to_string(),
                })
            }
            "/category" | "/c" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("/category <name|number>  (see /categories)"));
                }
                Ok(ReplCommand::Category(rest.parse()?))
            }
            "/tone" | "/t" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("/tone <name|number>  (see /tones)"));
                }
                Ok(ReplCommand::Tone(rest.parse()?))
            }
            "/categories" => Ok(ReplCommand::ListCategories),
            "/tones" => Ok(ReplCommand::ListTones),
            "/generate" | "/go" | "/g" => Ok(ReplCommand::Generate),
            "/show" => Ok(ReplCommand::Show),
            "/save" => Ok(ReplCommand::Save(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "/clear" => Ok(ReplCommand::Clear),
            "/status" => Ok(ReplCommand::Status),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
