//! Advisory data types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EMERGENCY_CALL_TARGET;

/// Ordinal severity of a triage result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// Self-care or routine visit
    Low,
    /// Should be seen by a clinic soon
    Moderate,
    /// Possible emergency, call for help
    High,
}

impl Urgency {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Moderate => "Moderate",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single recommended action surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStepCta {
    /// Button label
    pub label: String,
    /// In-app route or `tel:` URI
    #[serde(rename = "href", alias = "target")]
    pub target: String,
}

impl NextStepCta {
    /// Create a call-to-action
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Whether this action dials emergency services
    pub fn is_emergency_call(&self) -> bool {
        self.target == EMERGENCY_CALL_TARGET
    }
}

/// Structured triage result
///
/// Field names follow the JSON contract shared with the browser UI and the
/// remote completion prompt, so the struct serializes in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub urgency: Urgency,
    /// Hedged label such as "Possible Headache Pattern", never a diagnosis
    pub summary_title: String,
    pub reasoning_bullets: Vec<String>,
    pub recommendations: Vec<String>,
    /// Signs that warrant escalation; may be empty
    pub red_flags: Vec<String>,
    pub next_step_cta: NextStepCta,
}

impl Advisory {
    /// Check the emergency invariant: a `High` advisory must direct the user
    /// to the emergency-call target.
    pub fn meets_emergency_invariant(&self) -> bool {
        self.urgency != Urgency::High || self.next_step_cta.is_emergency_call()
    }
}
