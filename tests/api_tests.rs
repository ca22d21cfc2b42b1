use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use companio_axum::handlers::MetricsState;
use companio_axum::models::ThemeMode;
use companio_axum::{startup, AppConfig, AppState};

/// Builds a router over a scratch storage file with zero latency. The tempdir
/// must stay alive for the storage file's sake.
fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        storage_path: dir.path().join("storage.json"),
        latency_ms: 0,
        cors_origin: "http://localhost:5173".to_string(),
        default_theme: ThemeMode::Light,
        seed_demo: false,
        debug_key: Some("test-key".to_string()),
    };

    // A non-installed recorder keeps tests independent of global state.
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::from_config(config, Arc::new(MetricsState { handle })).expect("state");

    (startup::build_router(state), dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = test_app();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_entry_crud_flow() {
    let (app, _dir) = test_app();

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/entries",
            json!({"userId": "u1", "content": "hello", "mood": "happy"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["content"], "hello");
    assert_eq!(created["mood"], "happy");

    // The new entry is first in the owner's listing
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/entries?userId=u1"))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed[0]["id"], id.as_str());

    // Get by id
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/entries/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/entries/{id}"),
            json!({"mood": "neutral"}),
        ))
        .await
        .unwrap();
    let updated = body_json(response).await;
    assert_eq!(updated["mood"], "neutral");
    assert_eq!(updated["content"], "hello");

    // Delete succeeds once, then 404s
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/entries/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/entries/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("GET", &format!("/api/entries/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_entries_requires_user_id() {
    let (app, _dir) = test_app();

    let response = app.oneshot(empty_request("GET", "/api/entries")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_goal_toggle_flow() {
    let (app, _dir) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/goals",
            json!({"userId": "u1", "title": "Meditate", "category": "health"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let goal = body_json(response).await;
    let id = goal["id"].as_str().unwrap().to_string();
    assert_eq!(goal["completed"], false);

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("/api/goals/{id}/toggle")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["completed"], true);

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("/api/goals/{id}/toggle")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["completed"], false);

    let response = app
        .oneshot(empty_request("POST", "/api/goals/goal-missing/toggle"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_settings_default_then_persist() {
    let (app, _dir) = test_app();

    let expected_default = json!({
        "userId": "new-user",
        "voiceType": "female",
        "childMode": false,
        "notificationsEnabled": true,
        "language": "en",
        "autoThemeChange": true
    });

    // Two reads of a never-written user both synthesize the default
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/settings/new-user"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, expected_default);
    }

    // Update merges and persists
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings/new-user",
            json!({"language": "fr", "childMode": true}),
        ))
        .await
        .unwrap();
    let merged = body_json(response).await;
    assert_eq!(merged["language"], "fr");
    assert_eq!(merged["childMode"], true);
    assert_eq!(merged["voiceType"], "female");

    let response = app
        .oneshot(empty_request("GET", "/api/settings/new-user"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, merged);
}

#[tokio::test]
async fn test_content_endpoints() {
    let (app, _dir) = test_app();

    let pool = [
        "You are capable of amazing things.",
        "Today is full of possibilities.",
        "You have the power to create change.",
        "Your potential is limitless.",
        "You are enough just as you are.",
    ];

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/content/affirmation"))
        .await
        .unwrap();
    let affirmation = body_json(response).await;
    assert!(pool.contains(&affirmation["affirmation"].as_str().unwrap()));

    // Prompts come back verbatim, fixed order, on every call
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/content/prompts"))
            .await
            .unwrap();
        let prompts = body_json(response).await;
        assert_eq!(prompts[0], "What made you smile today?");
        assert_eq!(prompts.as_array().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_auth_session_flow() {
    let (app, _dir) = test_app();

    // No session yet
    let response = app.clone().oneshot(empty_request("GET", "/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Any non-empty email logs in; the password is ignored
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "ada@example.com", "password": "anything"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["name"], "ada");
    assert!(user["id"].as_str().unwrap().starts_with("user-"));

    let response = app.clone().oneshot(empty_request("GET", "/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "ada@example.com");

    // Empty email is the one rejected input
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Register uses the supplied display name
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"email": "sam@example.com", "password": "pw", "name": "Sam"}),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["name"], "Sam");

    // Logout clears the session
    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/auth/logout"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_theme_flow() {
    let (app, _dir) = test_app();

    let response = app.clone().oneshot(empty_request("GET", "/api/theme")).await.unwrap();
    assert_eq!(body_json(response).await, json!({"theme": "light"}));

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/theme", json!({"theme": "dark"})))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({"theme": "dark"}));

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/theme/toggle"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({"theme": "light"}));
}

#[tokio::test]
async fn test_debug_endpoint_requires_key() {
    let (app, _dir) = test_app();

    let response = app.clone().oneshot(empty_request("GET", "/debug")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .method("GET")
        .uri("/debug")
        .header("X-Debug-Key", "test-key")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let info = body_json(response).await;
    assert_eq!(info["entry_count"], 0);
    assert_eq!(info["session_active"], false);
}
