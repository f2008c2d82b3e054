// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the dispatch hub.
//!
//! Configuration is loaded from multiple sources with the following
//! priority (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. launch-hub.yaml file
//! 3. Environment variables (LAUNCH_HUB_* and per-provider tokens)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dispatch settings
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        // Load from file if specified
        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            // Try default locations
            for path in &[
                "launch-hub.yaml",
                "launch-hub.yml",
                "/etc/launch-hub/config.yaml",
            ] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("LAUNCH_HUB_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LAUNCH_HUB_MAX_IN_FLIGHT") {
            if let Ok(ceiling) = val.parse() {
                self.dispatch.max_in_flight = ceiling;
            }
        }
        if let Ok(val) = env::var("LAUNCH_HUB_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.dispatch.request_timeout_secs = secs;
            }
        }

        // Per-provider endpoint and credential overrides
        for (provider, prefix) in [
            (&mut self.providers.ibm, "IBM"),
            (&mut self.providers.google, "GOOGLE"),
            (&mut self.providers.microsoft, "MICROSOFT"),
            (&mut self.providers.amazon, "AMAZON"),
        ] {
            if let Ok(val) = env::var(format!("{prefix}_ENDPOINT")) {
                provider.endpoint = Some(val);
            }
            if let Ok(val) = env::var(format!("{prefix}_AUTH_TOKEN")) {
                provider.credential = Some(val);
                provider.enabled = true;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dispatch.max_in_flight == 0 {
            return Err(Error::Config("max_in_flight cannot be 0".into()));
        }
        if self.dispatch.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs cannot be 0".into()));
        }
        for custom in &self.providers.custom {
            if custom.name.is_empty() {
                return Err(Error::Config("custom provider name cannot be empty".into()));
            }
            if custom.endpoint.is_empty() {
                return Err(Error::Config(format!(
                    "custom provider '{}' has no endpoint",
                    custom.name
                )));
            }
        }
        Ok(())
    }
}

/// Dispatch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Maximum outbound provider calls in flight at once, process-wide
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight: default_max_in_flight(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_max_in_flight() -> usize {
    5
}

fn default_request_timeout() -> u64 {
    30
}

/// Provider configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// IBM Quantum
    #[serde(default)]
    pub ibm: ProviderConfig,

    /// Google Quantum AI
    #[serde(default)]
    pub google: ProviderConfig,

    /// Microsoft Azure Quantum
    #[serde(default)]
    pub microsoft: ProviderConfig,

    /// Amazon Braket
    #[serde(default)]
    pub amazon: ProviderConfig,

    /// Additional providers beyond the built-in set
    #[serde(default)]
    pub custom: Vec<CustomProviderConfig>,
}

/// One well-known provider's configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Whether the provider is registered
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Endpoint URL (falls back to the provider's built-in endpoint)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Opaque bearer credential; never serialized back out
    #[serde(default, skip_serializing)]
    pub credential: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
            credential: None,
        }
    }
}

/// A custom provider entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomProviderConfig {
    /// Provider name (normalized to uppercase at registration)
    pub name: String,

    /// Endpoint URL (required for custom providers)
    pub endpoint: String,

    /// Opaque bearer credential; never serialized back out
    #[serde(default, skip_serializing)]
    pub credential: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "json".into()
}
