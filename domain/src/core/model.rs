//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation models (Value Object)
///
/// Both pipeline stages run against the same model. The default is fixed
/// to GPT-4o; other identifiers are accepted as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    Gpt41Mini,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Custom(s) => s,
        }
    }

    /// Known (non-custom) models
    pub fn known_models() -> Vec<Model> {
        vec![Model::Gpt4o, Model::Gpt4oMini, Model::Gpt41, Model::Gpt41Mini]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (GPT-4o)
    fn default() -> Self {
        Model::Gpt4o
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
