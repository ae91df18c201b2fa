//! Per-IP rate limiting over a real socket

use api::{create_governor_config, create_router, AppState, RateLimitConfig};
use care_directory::Directory;
use std::net::SocketAddr;
use std::sync::Arc;
use triage::{Classifier, ResolutionPolicy};

async fn spawn_limited() -> SocketAddr {
    let policy = ResolutionPolicy::local_only(Classifier::builtin());
    let state = Arc::new(AppState::new(policy, Directory::quesnel(), None));
    let rate_limit = create_governor_config(&RateLimitConfig::default());
    assert!(rate_limit.is_some());
    let app = create_router(state, rate_limit);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });
    addr
}

#[tokio::test]
async fn chat_is_limited_after_burst() {
    let addr = spawn_limited().await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/api/chat", addr);

    let mut statuses = Vec::new();
    for _ in 0..7 {
        let response = client
            .post(&url)
            .json(&serde_json::json!({ "message": "sore throat" }))
            .send()
            .await
            .unwrap();
        statuses.push(response.status().as_u16());
    }

    assert_eq!(statuses, [200, 200, 200, 200, 200, 429, 429]);
}

#[tokio::test]
async fn directory_routes_are_not_limited() {
    let addr = spawn_limited().await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/api/places", addr);

    for _ in 0..10 {
        let response = client.get(&url).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }
}
