//! Rule Table

use advisory::Advisory;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::{builtin, RuleTableError};

/// A set of lowercase keywords paired with a fixed advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Substrings searched for in the lowercased message
    pub keywords: Vec<String>,
    /// Advisory returned when any keyword matches
    pub advisory: Advisory,
}

impl Rule {
    /// Check whether any keyword occurs in an already-lowercased message
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }
}

/// On-disk layout of a custom rule table
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleTableFile {
    rules: Vec<Rule>,
    default_advisory: Advisory,
}

/// Ordered rules plus the advisory used when none match
///
/// Immutable once built. Order is priority: the classifier returns the first
/// matching rule, never the best one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default_advisory: Advisory,
}

impl RuleTable {
    /// Build a validated table
    pub fn new(rules: Vec<Rule>, default_advisory: Advisory) -> Result<Self, RuleTableError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(RuleTableError::NoKeywords { index });
            }
            for keyword in &rule.keywords {
                // An empty keyword would match every message
                if keyword.is_empty() {
                    return Err(RuleTableError::EmptyKeyword { index });
                }
                if *keyword != keyword.to_lowercase() {
                    return Err(RuleTableError::NotLowercase {
                        index,
                        keyword: keyword.clone(),
                    });
                }
            }
            if !rule.advisory.meets_emergency_invariant() {
                return Err(RuleTableError::EmergencyTargetMissing { index });
            }
        }

        if !default_advisory.meets_emergency_invariant() {
            return Err(RuleTableError::DefaultEmergencyTargetMissing);
        }

        Ok(Self {
            rules,
            default_advisory,
        })
    }

    /// The table shipped with the service
    pub fn builtin() -> Self {
        Self {
            rules: builtin::rules(),
            default_advisory: builtin::default_advisory(),
        }
    }

    /// Parse and validate a table from JSON
    pub fn from_json(json: &str) -> Result<Self, RuleTableError> {
        let file: RuleTableFile = serde_json::from_str(json)?;
        Self::new(file.rules, file.default_advisory)
    }

    /// Load a table from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, RuleTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| RuleTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        info!("Loaded {} triage rules from {}", table.len(), path.display());
        Ok(table)
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Advisory used when no rule matches
    pub fn default_advisory(&self) -> &Advisory {
        &self.default_advisory
    }

    /// Number of rules, excluding the default
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
