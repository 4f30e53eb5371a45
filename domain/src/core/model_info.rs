//! Model description returned by the model listing endpoint

use super::model::Model;
use serde::Serialize;

/// Generation method name for plain content generation
pub const GENERATE_CONTENT: &str = "generateContent";

/// A model advertised by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-2.5-flash`
    pub name: String,
    pub display_name: Option<String>,
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, methods: Vec<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            supported_generation_methods: methods,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Check whether the model advertises the given generation method
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods.iter().any(|m| m == method)
    }

    /// Check whether the model can be used for content generation
    pub fn supports_generate_content(&self) -> bool {
        self.supports(GENERATE_CONTENT)
    }

    /// The model identifier without the `models/` prefix
    pub fn model(&self) -> Model {
        Model::from_resource_name(&self.name)
    }
}
