//! Generation settings value object

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Sampling temperature used for optimization reports
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Output cap used for optimization reports
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8000;

/// Upper bound the generation API accepts for temperature
const MAX_TEMPERATURE: f32 = 2.0;

/// Fixed parameters attached to every analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub model: Model,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationSettings {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Check the settings are within what the generation API accepts
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidSettings(
                "model name cannot be empty".to_string(),
            ));
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(DomainError::InvalidSettings(format!(
                "temperature must be between 0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(DomainError::InvalidSettings(
                "max_output_tokens cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_report_parameters() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, Model::Gemini25Flash);
        assert_eq!(settings.temperature, 0.3);
        assert_eq!(settings.max_output_tokens, 8000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let settings = GenerationSettings::default().with_temperature(2.5);
        assert!(matches!(
            settings.validate(),
            Err(DomainError::InvalidSettings(_))
        ));
        let settings = GenerationSettings::default().with_temperature(-0.1);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tokens_and_blank_model() {
        assert!(
            GenerationSettings::default()
                .with_max_output_tokens(0)
                .validate()
                .is_err()
        );
        assert!(
            GenerationSettings::default()
                .with_model(Model::Custom(" ".to_string()))
                .validate()
                .is_err()
        );
    }
}
