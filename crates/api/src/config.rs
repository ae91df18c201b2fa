//! Service configuration
//!
//! Layered with the `config` crate: defaults, then an optional config file,
//! then `TRIAGE_*` environment variables (`__` separates nested keys, e.g.
//! `TRIAGE_REMOTE__MODEL`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use triage::{PolicyConfig, RemoteConfig};

use crate::rate_limit::RateLimitConfig;

/// Config file consulted when `TRIAGE_CONFIG` is unset (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "triage";

/// Credential variable honoured when `remote.api_key` is not set
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Rule table source
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// JSON rule table replacing the built-in one
    pub path: Option<PathBuf>,
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Full service settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub policy: PolicyConfig,
    pub rules: RulesConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load from `TRIAGE_CONFIG` (or `triage.*`) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file =
            std::env::var("TRIAGE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&file)
    }

    /// Load from a named config file (optional) and the environment
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("TRIAGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.remote.credential().is_none() {
            if let Ok(key) = std::env::var(OPENAI_API_KEY_VAR) {
                settings.remote.api_key = Some(key);
            }
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.remote.model, "gpt-4o-mini");
        assert_eq!(settings.policy.remote_timeout_ms, 10_000);
        assert!(settings.rules.path.is_none());
        assert!(settings.rate_limit.enabled);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_file_and_environment() {
        let path = std::env::temp_dir().join(format!("triage-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"
[server]
bind_addr = "127.0.0.1:9000"

[remote]
model = "gpt-4o"
max_tokens = 300

[policy]
remote_timeout_ms = 2500

[rate_limit]
enabled = false
"#,
        )
        .unwrap();

        std::env::set_var("TRIAGE_LOGGING__JSON", "true");
        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        std::env::remove_var("TRIAGE_LOGGING__JSON");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(settings.remote.model, "gpt-4o");
        assert_eq!(settings.remote.max_tokens, 300);
        // Untouched keys keep their defaults
        assert!((settings.remote.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(settings.policy.remote_timeout_ms, 2500);
        assert!(!settings.rate_limit.enabled);
        assert!(settings.logging.json);
    }

    #[test]
    fn test_missing_file_is_optional() {
        let settings = Settings::load_from("/nonexistent/triage-settings").unwrap();
        assert_eq!(settings.server.bind_addr, "0.0.0.0:8080");
    }
}
