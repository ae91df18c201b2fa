//! Symptom Triage Engine
//!
//! Entry point used by the HTTP boundary. Tries the remote model when a
//! credential is configured and falls back to the local rule table on any
//! failure, so callers always receive a complete advisory.

mod policy;

pub use policy::{AdvisorySource, PolicyConfig, Resolution, ResolutionPolicy};

pub use advisory::{Advisory, NextStepCta, Urgency};
pub use remote_advisory::RemoteConfig;
pub use symptom_rules::{Classifier, RuleTable};

use thiserror::Error;

/// Errors while assembling the engine at startup
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Rule table error: {0}")]
    Rules(#[from] symptom_rules::RuleTableError),

    #[error("Remote client error: {0}")]
    Remote(#[from] remote_advisory::RemoteError),
}
