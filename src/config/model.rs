//! Prediction model configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.path"));
        }
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(ValidationError::InvalidModelPath),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model/lunaris_forest.json")
}
