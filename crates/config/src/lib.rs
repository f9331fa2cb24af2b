//! Configuration loading and validation for Guidepost.
//!
//! Loads configuration from an optional `config.toml` with environment
//! variable overrides (`GEMINI_API_KEY`, `PORT`). The upstream credential
//! is the one hard requirement: `validate()` fails without it and the
//! server refuses to start.

use std::path::{Path, PathBuf};

use guidepost_core::provider::GenerationParams;
use serde::{Deserialize, Serialize};

/// The root configuration structure.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream model provider API key. Usually supplied via the
    /// `GEMINI_API_KEY` environment variable rather than the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Upstream model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upstream API base URL. Overridable for tests and proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Gateway bind configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Fixed generation parameters sent with every upstream call.
    #[serde(default)]
    pub generation: GenerationParams,
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("gateway", &self.gateway)
            .field("generation", &self.generation)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    5001
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            gateway: GatewayConfig::default(),
            generation: GenerationParams::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `./config.toml` (if present) with
    /// environment variable overrides:
    /// - `GEMINI_API_KEY` — the upstream credential (highest priority)
    /// - `PORT` — gateway port
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(Path::new("config.toml"))?;

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            config.gateway.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid PORT value: {port}")))?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Validate the configuration. The process must not serve requests
    /// without an upstream credential.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(ConfigError::MissingApiKey),
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }

        if self.generation.temperature < 0.0 || self.generation.temperature > 2.0 {
            return Err(ConfigError::Validation(
                "generation.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set. Server cannot start.")]
    MissingApiKey,

    #[error("Failed to read config file at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_shape() {
        let config = AppConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.gateway.port, 5001);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.model, "gemini-1.5-flash");
    }

    #[test]
    fn validate_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiKey)
        ));

        let config = AppConfig {
            api_key: Some("   ".into()),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiKey)
        ));

        let config = AppConfig {
            api_key: Some("test-key".into()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_temperature_rejected() {
        let mut config = AppConfig {
            api_key: Some("test-key".into()),
            ..AppConfig::default()
        };
        config.generation.temperature = 5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn file_values_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "model = \"gemini-2.0-flash\"\n[gateway]\nport = 8080\n[generation]\ntemperature = 0.3"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.gateway.port, 8080);
        assert!((config.generation.temperature - 0.3).abs() < f32::EPSILON);
        // Unspecified params keep their defaults.
        assert_eq!(config.generation.max_output_tokens, 8192);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("super-secret".into()),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
