//! First-match keyword classifier

use advisory::Advisory;
use std::sync::OnceLock;
use tracing::debug;

use crate::RuleTable;

/// Maps free text to an advisory using a rule table
///
/// Pure: no I/O and no interior state, so one instance can be shared freely
/// across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: RuleTable,
}

impl Classifier {
    /// Create a classifier over a table
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Classifier over the built-in table
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    /// Index of the first rule matching the message, if any
    pub fn matched_rule(&self, message: &str) -> Option<usize> {
        let lowered = message.to_lowercase();
        self.table.rules().iter().position(|rule| rule.matches(&lowered))
    }

    /// Classify a message
    ///
    /// Returns the advisory of the first rule with any keyword occurring in
    /// the lowercased message, or the default advisory.
    pub fn classify(&self, message: &str) -> Advisory {
        match self.matched_rule(message) {
            Some(index) => {
                debug!("Message matched triage rule {}", index);
                self.table.rules()[index].advisory.clone()
            }
            None => {
                debug!("No triage rule matched, using default advisory");
                self.table.default_advisory().clone()
            }
        }
    }

    /// The underlying table
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

/// Classify a message against the built-in table
pub fn classify(message: &str) -> Advisory {
    static BUILTIN: OnceLock<Classifier> = OnceLock::new();
    BUILTIN.get_or_init(Classifier::builtin).classify(message)
}
