//! Resolution Policy

use advisory::Advisory;
use remote_advisory::{RemoteAdvisoryClient, RemoteConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use symptom_rules::{Classifier, RuleTable};
use tracing::{debug, info, warn};

use crate::TriageError;

/// Policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Upper bound on a remote attempt before falling back (milliseconds)
    pub remote_timeout_ms: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            remote_timeout_ms: 10_000,
        }
    }
}

/// Where an advisory came from
///
/// Side-channel only: never part of the advisory returned to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySource {
    /// Rule table, no remote configured
    Local,
    /// Remote model
    Remote,
    /// Rule table after a failed remote attempt
    LocalFallback {
        /// Failure label, see `RemoteError::reason`
        reason: &'static str,
    },
}

impl AdvisorySource {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisorySource::Local => "local",
            AdvisorySource::Remote => "remote",
            AdvisorySource::LocalFallback { .. } => "local_fallback",
        }
    }

    /// Whether a remote attempt was made and failed
    pub fn is_fallback(&self) -> bool {
        matches!(self, AdvisorySource::LocalFallback { .. })
    }
}

/// Advisory plus its origin
#[derive(Debug, Clone)]
pub struct Resolution {
    pub advisory: Advisory,
    pub source: AdvisorySource,
}

/// Remote-first triage with silent local fallback
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct ResolutionPolicy {
    classifier: Classifier,
    remote: Option<RemoteAdvisoryClient>,
    remote_timeout: Duration,
}

impl ResolutionPolicy {
    /// Create a policy from its parts. `remote: None` disables the remote path.
    pub fn new(
        classifier: Classifier,
        remote: Option<RemoteAdvisoryClient>,
        config: &PolicyConfig,
    ) -> Self {
        Self {
            classifier,
            remote,
            remote_timeout: Duration::from_millis(config.remote_timeout_ms),
        }
    }

    /// Rule table only
    pub fn local_only(classifier: Classifier) -> Self {
        Self::new(classifier, None, &PolicyConfig::default())
    }

    /// Assemble the policy from configuration
    ///
    /// Loads the rule table from `rules_path` when given, otherwise uses the
    /// built-in table. The remote path is enabled only when the remote config
    /// carries a credential.
    pub fn from_config(
        remote: &RemoteConfig,
        policy: &PolicyConfig,
        rules_path: Option<&Path>,
    ) -> Result<Self, TriageError> {
        let table = match rules_path {
            Some(path) => RuleTable::from_path(path)?,
            None => RuleTable::builtin(),
        };

        let client = match remote.credential() {
            Some(credential) => {
                let client = RemoteAdvisoryClient::new(remote, credential)?;
                info!("Remote advisory enabled with model {}", client.model());
                Some(client)
            }
            None => {
                info!("No remote credential configured, using rule-based triage only");
                None
            }
        };

        Ok(Self::new(Classifier::new(table), client, policy))
    }

    /// Whether the remote path is enabled
    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// The local classifier
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Resolve a message to an advisory
    pub async fn resolve(&self, message: &str) -> Advisory {
        self.resolve_with_source(message).await.advisory
    }

    /// Resolve a message and report where the advisory came from
    pub async fn resolve_with_source(&self, message: &str) -> Resolution {
        let Some(remote) = &self.remote else {
            return self.local(message, AdvisorySource::Local);
        };

        match tokio::time::timeout(self.remote_timeout, remote.fetch_advisory(message)).await {
            Ok(Ok(advisory)) => {
                // Trusted as returned; only flagged
                if !advisory.meets_emergency_invariant() {
                    warn!(
                        "Remote advisory is High urgency but points to {:?}",
                        advisory.next_step_cta.target
                    );
                    metrics::counter!("triage_remote_invariant_violations_total").increment(1);
                }
                debug!("Remote advisory: {}", advisory.urgency);
                record(AdvisorySource::Remote);
                Resolution {
                    advisory,
                    source: AdvisorySource::Remote,
                }
            }
            Ok(Err(e)) => {
                warn!("Remote advisory failed, falling back to rules: {}", e);
                self.local(message, AdvisorySource::LocalFallback { reason: e.reason() })
            }
            Err(_) => {
                warn!(
                    "Remote advisory exceeded {}ms, falling back to rules",
                    self.remote_timeout.as_millis()
                );
                self.local(
                    message,
                    AdvisorySource::LocalFallback {
                        reason: "policy_timeout",
                    },
                )
            }
        }
    }

    fn local(&self, message: &str, source: AdvisorySource) -> Resolution {
        if let AdvisorySource::LocalFallback { reason } = source {
            metrics::counter!("triage_remote_failures_total", "reason" => reason).increment(1);
        }
        record(source);
        Resolution {
            advisory: self.classifier.classify(message),
            source,
        }
    }
}

fn record(source: AdvisorySource) {
    metrics::counter!("triage_requests_total", "source" => source.as_str()).increment(1);
}
