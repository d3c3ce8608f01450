//! Application configuration
//!
//! Configuration loaded from `.goals-todos.toml`, with environment overrides
//! for the simulated service.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding [`ApiConfig::failure_rate`]
pub const ENV_FAILURE_RATE: &str = "GOALS_TODOS_FAILURE_RATE";
/// Environment variable overriding [`ApiConfig::latency_ms`]
pub const ENV_LATENCY_MS: &str = "GOALS_TODOS_LATENCY_MS";

/// Application configuration loaded from `.goals-todos.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Todos and goals whose name contains this term are rejected
    #[serde(default = "default_forbidden_term")]
    pub forbidden_term: String,

    /// Notice shown when an item is rejected
    #[serde(default = "default_rejection_message")]
    pub rejection_message: String,

    /// Notice shown when the service fails to confirm a change
    #[serde(default = "default_failure_message")]
    pub failure_message: String,

    /// Simulated service settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the simulated todo/goal service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Delay before every service call settles
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Probability (0.0..=1.0) that a mutation fails
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

fn default_forbidden_term() -> String {
    "bitcoin".to_string()
}

fn default_rejection_message() -> String {
    "No. That's a bad idea!".to_string()
}

fn default_failure_message() -> String {
    "An error occurred. Try again.".to_string()
}

fn default_latency_ms() -> u64 {
    300
}

fn default_failure_rate() -> f64 {
    0.2
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            forbidden_term: default_forbidden_term(),
            rejection_message: default_rejection_message(),
            failure_message: default_failure_message(),
            api: ApiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl ApiConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    ///
    /// Environment overrides are applied on top.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_else(|| {
            log::debug!("Using default app config");
            Self::default()
        });
        config.apply_env_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_FAILURE_RATE) {
            match raw.parse::<f64>() {
                Ok(rate) => self.api.failure_rate = rate.clamp(0.0, 1.0),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_FAILURE_RATE, raw, e),
            }
        }
        if let Some(raw) = lookup(ENV_LATENCY_MS) {
            match raw.parse::<u64>() {
                Ok(ms) => self.api.latency_ms = ms,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_LATENCY_MS, raw, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.forbidden_term, "bitcoin");
        assert_eq!(config.rejection_message, "No. That's a bad idea!");
        assert_eq!(config.failure_message, "An error occurred. Try again.");
        assert_eq!(config.api.latency_ms, 300);
        assert_eq!(config.api.failure_rate, 0.2);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            forbidden_term = "lottery"

            [api]
            failure_rate = 0.0
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.forbidden_term, "lottery");
        assert_eq!(config.api.failure_rate, 0.0);
        // Other fields should use defaults
        assert_eq!(config.api.latency_ms, 300);
        assert_eq!(config.rejection_message, "No. That's a bad idea!");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_FAILURE_RATE, "1.5"), (ENV_LATENCY_MS, "0")]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api.failure_rate, 1.0);
        assert_eq!(config.api.latency(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_env_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| (key == ENV_LATENCY_MS).then(|| "soon".to_string()));
        assert_eq!(config.api.latency_ms, 300);
    }
}
