//! Symptom Checker Route

use advisory::Advisory;
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::{ApiError, AppState};

/// Extract a non-empty string `message` from a raw request body
///
/// The body must be a JSON object; arrays and scalars are rejected even when
/// their first element is a string.
pub fn parse_message(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::MessageRequired)?;

    let Value::Object(mut fields) = value else {
        return Err(ApiError::MessageRequired);
    };

    match fields.remove("message") {
        Some(Value::String(message)) if !message.is_empty() => Ok(message),
        _ => Err(ApiError::MessageRequired),
    }
}

/// Triage a symptom description
///
/// Always answers 200 with an advisory once the input is valid; whether it
/// came from the remote model or the rule table is only logged.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Advisory>, ApiError> {
    let message = parse_message(&body)?;
    let request_id = Uuid::new_v4();

    let resolution = state
        .policy
        .resolve_with_source(&message)
        .instrument(info_span!("triage", %request_id))
        .await;

    info!(
        %request_id,
        source = resolution.source.as_str(),
        fallback = resolution.source.is_fallback(),
        urgency = %resolution.advisory.urgency,
        "Triage resolved"
    );

    Ok(Json(resolution.advisory))
}

/// Any method other than POST on the chat route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        assert_eq!(parse_message(br#"{"message": "I have a cough"}"#).unwrap(), "I have a cough");
        assert_eq!(
            parse_message(br#"{"message": "fever", "locale": "en"}"#).unwrap(),
            "fever"
        );
    }

    #[test]
    fn test_parse_message_rejects_invalid_input() {
        let bodies: [&[u8]; 11] = [
            b"",
            b"not json",
            b"null",
            b"[]",
            b"{}",
            br#"{"message": ""}"#,
            br#"{"message": 42}"#,
            br#"{"message": null}"#,
            br#"{"message": ["cough"]}"#,
            br#"["cough"]"#,
            br#""I have chest pain""#,
        ];
        for body in bodies {
            assert!(
                matches!(parse_message(body), Err(ApiError::MessageRequired)),
                "accepted {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
