//! Rule-Based Symptom Triage
//!
//! An ordered keyword rule table and the classifier that scans it. This is
//! the local path of the triage engine and the fallback whenever the remote
//! model is unavailable.

mod builtin;
mod classifier;
mod table;

pub use classifier::{classify, Classifier};
pub use table::{Rule, RuleTable};

use std::path::PathBuf;
use thiserror::Error;

/// Errors while building or loading a rule table
#[derive(Debug, Error)]
pub enum RuleTableError {
    #[error("Failed to read rule table {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid rule table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rule {index} has no keywords")]
    NoKeywords { index: usize },

    #[error("Rule {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    #[error("Rule {index} keyword {keyword:?} is not lowercase")]
    NotLowercase { index: usize, keyword: String },

    #[error("Rule {index} is High urgency but does not direct to the emergency call")]
    EmergencyTargetMissing { index: usize },

    #[error("Default advisory is High urgency but does not direct to the emergency call")]
    DefaultEmergencyTargetMissing,
}
