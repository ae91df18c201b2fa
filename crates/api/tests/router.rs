//! Router tests over a rule-table-only engine

use api::{create_router, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use care_directory::Directory;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use triage::{Classifier, ResolutionPolicy};

fn app() -> Router {
    let policy = ResolutionPolicy::local_only(Classifier::builtin());
    let state = Arc::new(AppState::new(policy, Directory::quesnel(), None));
    create_router(state, None)
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_returns_emergency_advisory() {
    let response = app()
        .oneshot(post_chat(r#"{"message": "I have chest pain and can't breathe"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["urgency"], "High");
    assert_eq!(json["nextStepCta"]["href"], "tel:911");
    assert!(json["redFlags"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn chat_returns_default_for_unmatched_message() {
    let response = app()
        .oneshot(post_chat(r#"{"message": "my elbow hurts a little"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["urgency"], "Low");
    assert_eq!(json["summaryTitle"], "General Health Inquiry");
    assert_eq!(json["nextStepCta"]["href"], "/map");
}

#[tokio::test]
async fn chat_rejects_missing_message() {
    for body in [
        "{}",
        r#"{"message": 7}"#,
        r#"{"message": ""}"#,
        r#"["I have chest pain"]"#,
        "garbage",
    ] {
        let response = app().oneshot(post_chat(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        let json = json_body(response).await;
        assert_eq!(json["error"], "Message is required");
    }
}

#[tokio::test]
async fn chat_rejects_other_methods() {
    let response = app().oneshot(get("/api/chat")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Method not allowed");
}

#[tokio::test]
async fn health_reports_rule_table() {
    let response = app().oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["rules"]["rule_count"], 7);
    assert_eq!(json["components"]["remote"]["status"], "disabled");
}

#[tokio::test]
async fn places_filter_by_category() {
    let response = app().oneshot(get("/api/places?category=pharmacy")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["id"], "shoppers");
    assert_eq!(json["data"][0]["phoneUri"], "tel:2509922214");
    assert!(json["data"][0]["directionsUrl"]
        .as_str()
        .unwrap()
        .contains("destination="));
    assert_eq!(json["center"]["lat"], 52.9784);
}

#[tokio::test]
async fn places_reject_unknown_category() {
    let response = app().oneshot(get("/api/places?category=dentist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn place_lookup_by_id() {
    let response = app().oneshot(get("/api/places/gr-baker")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["waitMins"], 25);
    assert_eq!(json["phoneUri"], "tel:2509855600");

    let response = app().oneshot(get("/api/places/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn faqs_and_contacts() {
    let response = app().oneshot(get("/api/faqs")).await.unwrap();
    assert_eq!(json_body(response).await["count"], 4);

    let response = app().oneshot(get("/api/contacts")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json["count"], 3);
    assert_eq!(json["data"][0]["href"], "tel:911");
}

#[tokio::test]
async fn metrics_unavailable_without_exporter() {
    let response = app().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
