// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Asset configuration loading.
//!
//! Configuration is loaded once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading an asset configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Connection settings for the NetWitness appliance
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssetConfig {
    /// Base URL of the appliance REST API
    pub url: String,

    /// API username for basic auth
    pub username: String,

    /// API password for basic auth
    pub password: String,

    /// Verify the appliance TLS certificate (default: false)
    #[serde(default)]
    pub verify_server_cert: bool,
}

impl AssetConfig {
    /// Load a configuration from a TOML or JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validated()
    }

    /// Validate field contents and normalize the base URL
    fn validated(mut self) -> Result<Self, ConfigError> {
        self.url = self.url.trim().trim_end_matches('/').to_string();
        if self.url.is_empty() {
            return Err(ConfigError::Validation("url must not be empty".to_string()));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "url '{}' must start with http:// or https://",
                self.url
            )));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        Ok(self)
    }

    /// Create a config from parts, applying the same validation as `load`
    pub fn new(
        url: &str,
        username: &str,
        password: &str,
        verify_server_cert: bool,
    ) -> Result<Self, ConfigError> {
        Self {
            url: url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            verify_server_cert,
        }
        .validated()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
