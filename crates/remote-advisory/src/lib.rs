//! Remote Advisory Client
//!
//! Sends the user's message with a fixed triage instruction to a hosted
//! chat-completion service and parses the reply as an [`Advisory`].
//! One attempt per call; every failure is returned as a [`RemoteError`] for
//! the caller to fall back on.

mod client;
mod config;
mod prompt;

pub use client::{fetch_remote_advisory, parse_completion, RemoteAdvisoryClient};
pub use config::RemoteConfig;
pub use prompt::SYSTEM_PROMPT;

pub use advisory::Advisory;

use thiserror::Error;

/// Errors from a remote advisory attempt
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("No remote credential configured")]
    MissingCredential,

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Remote request timed out after {0}s")]
    Timeout(u64),

    #[error("Remote request failed: {0}")]
    Network(String),

    #[error("Remote service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed completion envelope: {0}")]
    Envelope(String),

    #[error("Completion contained no message content")]
    MissingContent,

    #[error("Completion content is not a valid advisory: {0}")]
    Content(String),
}

impl RemoteError {
    /// Short label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            RemoteError::MissingCredential => "missing_credential",
            RemoteError::Client(_) => "client",
            RemoteError::Timeout(_) => "timeout",
            RemoteError::Network(_) => "network",
            RemoteError::Status { .. } => "status",
            RemoteError::Envelope(_) => "envelope",
            RemoteError::MissingContent => "missing_content",
            RemoteError::Content(_) => "content",
        }
    }
}
