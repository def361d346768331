//! Configuration management for the NewsCheck client
//!
//! This module provides utilities for loading and validating the backend
//! configuration, with support for environment variables.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ClientError, Result};

/// Base trait for configuration providers
pub trait ConfigProvider: Send + Sync {
    /// Get a string configuration value
    fn get_string(&self, key: &str) -> Result<String>;
}

/// Extension methods for configuration providers
pub trait ConfigProviderExt: ConfigProvider {
    /// Get an integer configuration value
    fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get_string(key)?;
        value.parse::<i64>().map_err(|e| {
            ClientError::configuration(format!("Invalid integer for key {}: {}", key, e))
        })
    }

    /// Get a string configuration value with a default
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get an integer configuration value with a default
    fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }
}

impl<T: ConfigProvider> ConfigProviderExt for T {}

/// Environment variable based configuration provider
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    /// Optional prefix for environment variables
    prefix: Option<String>,
}

impl EnvConfigProvider {
    /// Create a new environment variable config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Format a configuration key as an environment variable
    fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        env_key.push_str(&key.to_uppercase().replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

        env_key
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        let env_key = self.format_key(key);

        env::var(&env_key).map_err(|e| match e {
            env::VarError::NotPresent => {
                ClientError::configuration(format!("Environment variable not set: {}", env_key))
            }
            env::VarError::NotUnicode(_) => ClientError::configuration(format!(
                "Environment variable is not valid unicode: {}",
                env_key
            )),
        })
    }
}

/// In-memory config provider for testing or static configuration
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    /// Configuration values
    values: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory config provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(key.into(), value.to_string());
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn get_string(&self, key: &str) -> Result<String> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ClientError::configuration(format!("Configuration key not found: {}", key)))
    }
}

/// Global default configuration provider
pub static DEFAULT_PROVIDER: Lazy<Arc<EnvConfigProvider>> =
    Lazy::new(|| Arc::new(EnvConfigProvider::new().with_prefix("NEWSCHECK")));

/// Configuration for the detection backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend serving /predict and /confirm_guide
    pub base_url: String,

    /// Per-request timeout in seconds. A hung request resolves as a
    /// timeout error instead of leaving the page without feedback.
    pub timeout_seconds: u64,

    /// User agent override (optional)
    pub user_agent: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            // The backend's development address
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl BackendConfig {
    /// Load configuration from a config provider
    pub fn from_provider<P: ConfigProvider + ConfigProviderExt>(provider: &P) -> Result<Self> {
        let defaults = Self::default();

        let base_url = provider.get_string_or("backend_base_url", &defaults.base_url);
        let timeout_seconds =
            provider.get_int_or("backend_timeout_seconds", defaults.timeout_seconds as i64) as u64;
        let user_agent = provider.get_string("backend_user_agent").ok();

        let config = Self {
            base_url,
            timeout_seconds,
            user_agent,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::configuration("Backend base URL is required"));
        }

        Url::parse(&self.base_url)
            .map_err(|e| ClientError::configuration(format!("Invalid backend base URL: {}", e)))?;

        if self.timeout_seconds == 0 {
            return Err(ClientError::configuration(
                "Backend timeout must be at least one second",
            ));
        }

        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
