//! Find Care Triage API Server
//!
//! HTTP boundary for the symptom checker and the read-only care directory
//! feeds used by the mobile web app.

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use care_directory::Directory;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use triage::ResolutionPolicy;

pub mod config;
mod error;
pub mod rate_limit;
pub mod routes;

pub use config::{LoggingConfig, Settings};
pub use error::ApiError;
pub use rate_limit::{create_governor_config, DefaultGovernorConfig, RateLimitConfig};

/// Application state shared across handlers
///
/// Immutable after startup, so handlers share it through an `Arc` without
/// locking.
pub struct AppState {
    /// Triage engine
    pub policy: ResolutionPolicy,
    /// Static facility, FAQ and contact data
    pub directory: Directory,
    /// Prometheus render handle, when the exporter is installed
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(
        policy: ResolutionPolicy,
        directory: Directory,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            policy,
            directory,
            metrics,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub rules: RulesHealth,
    pub remote: RemoteHealth,
}

/// Rule table status
#[derive(Debug, Serialize)]
pub struct RulesHealth {
    pub status: String,
    pub rule_count: usize,
}

/// Remote advisory status
#[derive(Debug, Serialize)]
pub struct RemoteHealth {
    /// "enabled" or "disabled"
    pub status: String,
}

/// Create the application router
///
/// `rate_limit` applies only to the chat route; pass `None` when the service
/// is not run with peer address info (e.g. in tests).
pub fn create_router(
    state: Arc<AppState>,
    rate_limit: Option<Arc<DefaultGovernorConfig>>,
) -> Router {
    let mut chat = Router::new().route(
        "/api/chat",
        post(routes::chat::chat).fallback(routes::chat::method_not_allowed),
    );
    if let Some(config) = rate_limit {
        chat = chat.layer(GovernorLayer { config });
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/places", get(routes::directory::get_places))
        .route("/api/places/:id", get(routes::directory::get_place))
        .route("/api/faqs", get(routes::directory::get_faqs))
        .route("/api/contacts", get(routes::directory::get_contacts))
        .route("/metrics", get(metrics_handler))
        .merge(chat)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let remote_status = if state.policy.remote_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            rules: RulesHealth {
                status: "ok".to_string(),
                rule_count: state.policy.classifier().table().len(),
            },
            remote: RemoteHealth {
                status: remote_status.to_string(),
            },
        },
    })
}

/// Prometheus exposition handler
async fn metrics_handler(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or_else(|| ApiError::Unavailable("Metrics exporter not installed".to_string()))
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

/// Run the server until Ctrl-C
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let policy = ResolutionPolicy::from_config(
        &settings.remote,
        &settings.policy,
        settings.rules.path.as_deref(),
    )
    .context("Failed to build triage engine")?;

    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics exporter disabled: {}", e);
            None
        }
    };

    let rate_limit = if settings.rate_limit.enabled {
        Some(
            create_governor_config(&settings.rate_limit)
                .context("rate_limit.per_second and rate_limit.burst_size must be non-zero")?,
        )
    } else {
        None
    };

    let state = Arc::new(AppState::new(policy, Directory::quesnel(), metrics));
    let app = create_router(state, rate_limit);

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server.bind_addr))?;
    info!("Starting triage API on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
