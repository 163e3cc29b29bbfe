//! Model value object representing a hosted LLM

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted LLM models (Value Object)
///
/// Every agent sends its request to one of these identifiers. Anything
/// not listed is carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama33_70bInstruct,
    Llama31_405bInstruct,
    Llama31_8bInstruct,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama33_70bInstruct => "meta/llama-3.3-70b-instruct",
            Model::Llama31_405bInstruct => "meta/llama-3.1-405b-instruct",
            Model::Llama31_8bInstruct => "meta/llama-3.1-8b-instruct",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Llama 3.3 70B Instruct)
    fn default() -> Self {
        Model::Llama33_70bInstruct
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
            "meta/llama-3.3-70b-instruct" => Model::Llama33_70bInstruct,
            "meta/llama-3.1-405b-instruct" => Model::Llama31_405bInstruct,
            "meta/llama-3.1-8b-instruct" => Model::Llama31_8bInstruct,
            other => Model::Custom(other.to_string()),
        })
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
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
