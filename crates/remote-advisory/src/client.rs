//! Chat-completion client

use advisory::Advisory;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::{RemoteConfig, RemoteError, SYSTEM_PROMPT};

/// Conversation entry in a completion request
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Request body for the completion endpoint
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

/// Response envelope from the completion endpoint
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the remote completion service
pub struct RemoteAdvisoryClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout_secs: u64,
    credential: String,
}

impl RemoteAdvisoryClient {
    /// Create a client with an explicit credential
    pub fn new(config: &RemoteConfig, credential: &str) -> Result<Self, RemoteError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(RemoteError::MissingCredential);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;

        info!(
            "Remote advisory enabled: model {} at {}",
            config.model, config.endpoint
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_secs: config.request_timeout_secs,
            credential: credential.to_string(),
        })
    }

    /// Create a client using the configured credential
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let credential = config.credential().ok_or(RemoteError::MissingCredential)?;
        Self::new(config, credential)
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the remote service for an advisory
    ///
    /// Single attempt. Non-success statuses, malformed envelopes and content
    /// that does not deserialize into an [`Advisory`] are all errors.
    pub async fn fetch_advisory(&self, message: &str) -> Result<Advisory, RemoteError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!("Remote completion received ({} bytes)", body.len());

        parse_completion(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.timeout_secs)
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}

/// One-shot remote advisory with an explicit credential
pub async fn fetch_remote_advisory(
    config: &RemoteConfig,
    message: &str,
    credential: &str,
) -> Result<Advisory, RemoteError> {
    RemoteAdvisoryClient::new(config, credential)?
        .fetch_advisory(message)
        .await
}

/// Extract the advisory from a completion response body
///
/// The first choice's message content must itself be a JSON document of the
/// advisory shape.
pub fn parse_completion(body: &str) -> Result<Advisory, RemoteError> {
    let envelope: CompletionResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::Envelope(e.to_string()))?;

    let content = envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(RemoteError::MissingContent)?;

    serde_json::from_str(content.trim()).map_err(|e| RemoteError::Content(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisory::Urgency;

    fn envelope(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    const ADVISORY_JSON: &str = r#"{
        "urgency": "High",
        "summaryTitle": "Possible Cardiac Pattern",
        "reasoningBullets": ["Chest pain can be serious"],
        "recommendations": ["Call 911"],
        "redFlags": ["Pain spreading to the arm"],
        "nextStepCta": {"label": "Call 911", "href": "tel:911"}
    }"#;

    #[test]
    fn test_parse_completion() {
        let advisory = parse_completion(&envelope(ADVISORY_JSON)).unwrap();
        assert_eq!(advisory.urgency, Urgency::High);
        assert_eq!(advisory.next_step_cta.target, "tel:911");
    }

    #[test]
    fn test_parse_completion_prose_content() {
        let err = parse_completion(&envelope("You should see a doctor.")).unwrap_err();
        assert!(matches!(err, RemoteError::Content(_)));
    }

    #[test]
    fn test_parse_completion_incomplete_advisory() {
        let err = parse_completion(&envelope(r#"{"urgency": "Low"}"#)).unwrap_err();
        assert!(matches!(err, RemoteError::Content(_)));
    }

    #[test]
    fn test_parse_completion_no_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, RemoteError::MissingContent));

        let err = parse_completion(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap_err();
        assert!(matches!(err, RemoteError::MissingContent));
    }

    #[test]
    fn test_parse_completion_not_json() {
        let err = parse_completion("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RemoteError::Envelope(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            model: "gpt-4o-mini",
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: "I feel dizzy" },
            ],
            temperature: 0.3,
            max_tokens: 500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "I feel dizzy");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_new_requires_credential() {
        let config = RemoteConfig::default();
        assert!(matches!(
            RemoteAdvisoryClient::new(&config, "  "),
            Err(RemoteError::MissingCredential)
        ));
        assert!(matches!(
            RemoteAdvisoryClient::from_config(&config),
            Err(RemoteError::MissingCredential)
        ));
    }

    #[test]
    fn test_client_uses_configured_model() {
        let config = RemoteConfig {
            model: "gpt-4o".to_string(),
            ..Default::default()
        };
        let client = RemoteAdvisoryClient::new(&config, "sk-test").unwrap();
        assert_eq!(client.model(), "gpt-4o");
    }
}
