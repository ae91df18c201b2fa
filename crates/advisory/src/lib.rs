//! Triage Advisory Model
//!
//! The structured result of a symptom triage, shared by the local rule table,
//! the remote model client and the HTTP boundary.

mod model;

pub use model::{Advisory, NextStepCta, Urgency};

/// Emergency-call target every `High` advisory must point at
pub const EMERGENCY_CALL_TARGET: &str = "tel:911";

/// In-app route of the facility finder (map view)
pub const FACILITY_FINDER_ROUTE: &str = "/map";
