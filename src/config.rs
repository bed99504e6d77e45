//! Configuration system for the classifier service
//!
//! Every section and field is optional; missing values fall back to defaults.

use crate::classifier::{InputPolicy, OversizeAction, DEFAULT_MAX_INPUT_CHARS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub classifier: ClassifierSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// Input bound applied before classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierSection {
    /// Maximum accepted input length in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// "truncate" or "reject"
    #[serde(default)]
    pub oversize: OversizeAction,
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            oversize: OversizeAction::default(),
        }
    }
}

/// HTTP service section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClassifierConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClassifierConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.max_input_chars == 0 {
            return Err(ConfigError::InvalidConfig(
                "classifier.max_input_chars must be greater than 0".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "server.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `HOST` and `PORT` environment overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidConfig(format!("PORT '{port}' is not a valid port")))?;
        }
        self.validate()
    }

    /// Input policy derived from the classifier section
    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy::new(self.classifier.max_input_chars, self.classifier.oversize)
    }
}
