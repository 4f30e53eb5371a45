//! Model value object representing a Gemini generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix the listing endpoint puts in front of every model name
const RESOURCE_PREFIX: &str = "models/";

/// Gemini models the analyzer knows by name (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25Pro,
    Gemini25FlashLite,
    Gemini20Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Custom(s) => s,
        }
    }

    /// Parse a model from an API resource name such as `models/gemini-2.5-flash`
    pub fn from_resource_name(name: &str) -> Self {
        let id = name.strip_prefix(RESOURCE_PREFIX).unwrap_or(name);
        match id.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }

    /// The API resource name for this model (`models/<id>`)
    pub fn resource_name(&self) -> String {
        format!("{}{}", RESOURCE_PREFIX, self.as_str())
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 2.5 Flash)
    fn default() -> Self {
        Model::Gemini25Flash
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
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.0-flash" => Model::Gemini20Flash,
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
        Ok(Model::from_resource_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gemini25Flash);
        assert_eq!(Model::default().as_str(), "gemini-2.5-flash");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
    }

    #[test]
    fn test_from_resource_name_strips_prefix() {
        assert_eq!(
            Model::from_resource_name("models/gemini-2.5-pro"),
            Model::Gemini25Pro
        );
        assert_eq!(
            Model::from_resource_name("gemini-2.0-flash"),
            Model::Gemini20Flash
        );
        assert_eq!(Model::Gemini25Flash.resource_name(), "models/gemini-2.5-flash");
    }

    #[test]
    fn test_deserialize_accepts_resource_name() {
        let model: Model = serde_json::from_str("\"models/gemini-2.5-flash\"").unwrap();
        assert_eq!(model, Model::Gemini25Flash);
        assert_eq!(serde_json::to_string(&model).unwrap(), "\"gemini-2.5-flash\"");
    }
}
