//! Model value object representing a hosted chat model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat models served by Groq (Value Object)
///
/// Unknown identifiers are kept verbatim as [`Model::Custom`], so newly
/// released models work without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Meta Llama
    Llama3370bVersatile,
    Llama318bInstant,
    Llama4Scout,
    Llama4Maverick,
    // OpenAI open-weight
    GptOss120b,
    GptOss20b,
    // Others
    KimiK2,
    Qwen332b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama3370bVersatile => "llama-3.3-70b-versatile",
            Model::Llama318bInstant => "llama-3.1-8b-instant",
            Model::Llama4Scout => "meta-llama/llama-4-scout-17b-16e-instruct",
            Model::Llama4Maverick => "meta-llama/llama-4-maverick-17b-128e-instruct",
            Model::GptOss120b => "openai/gpt-oss-120b",
            Model::GptOss20b => "openai/gpt-oss-20b",
            Model::KimiK2 => "moonshotai/kimi-k2-instruct",
            Model::Qwen332b => "qwen/qwen3-32b",
            Model::Custom(s) => s,
        }
    }

    /// Models known to be available on Groq
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Llama3370bVersatile,
            Model::Llama318bInstant,
            Model::Llama4Scout,
            Model::Llama4Maverick,
            Model::GptOss120b,
            Model::GptOss20b,
            Model::KimiK2,
            Model::Qwen332b,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (llama-3.3-70b-versatile)
    fn default() -> Self {
        Model::Llama3370bVersatile
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
            "llama-3.3-70b-versatile" => Model::Llama3370bVersatile,
            "llama-3.1-8b-instant" => Model::Llama318bInstant,
            "meta-llama/llama-4-scout-17b-16e-instruct" => Model::Llama4Scout,
            "meta-llama/llama-4-maverick-17b-128e-instruct" => Model::Llama4Maverick,
            "openai/gpt-oss-120b" => Model::GptOss120b,
            "openai/gpt-oss-20b" => Model::GptOss20b,
            "moonshotai/kimi-k2-instruct" => Model::KimiK2,
            "qwen/qwen3-32b" => Model::Qwen332b,
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
