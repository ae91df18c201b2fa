//! Remote client configuration

use serde::{Deserialize, Serialize};

/// Remote completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Bearer credential; remote advisory is disabled when unset or blank
    pub api_key: Option<String>,
    /// Chat-completion endpoint URL
    pub endpoint: String,
    /// Model name sent with each request
    pub model: String,
    /// Sampling temperature, kept low for near-deterministic output
    pub temperature: f32,
    /// Output length cap
    pub max_tokens: u32,
    /// HTTP request timeout (seconds)
    pub request_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            request_timeout_secs: 15,
        }
    }
}

impl RemoteConfig {
    /// Configured credential, ignoring blank values
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 500);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert!(config.credential().is_none());
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let config = RemoteConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.credential().is_none());

        let config = RemoteConfig {
            api_key: Some(" sk-test ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credential(), Some("sk-test"));
    }
}
