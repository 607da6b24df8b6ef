mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use common::MockConnectInfoLayer;
use linksnip::api::handlers::{redirect_handler, shorten_handler};

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert!(!code.is_empty());
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["target"], "https://example.com/a");
    assert_eq!(
        body["short_url"],
        format!("http://localhost:3000/{}", code)
    );
    assert!(body["expires_at"].is_null());
}

#[sqlx::test]
async fn test_shorten_rejects_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_shorten_rejects_overlong_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let url = format!("https://example.com/{}", "a".repeat(2100));
    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_shorten_with_expiry(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com/seasonal",
            "expires_at": "2030-06-01T12:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["expires_at"], "2030-06-01T12:00:00Z");
}

#[sqlx::test]
async fn test_shorten_then_resolve(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    let code = created.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/a");
}

#[sqlx::test]
async fn test_shortened_codes_are_distinct(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let mut codes = std::collections::HashSet::new();
    for i in 0..10 {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": format!("https://example.com/{}", i) }))
            .await;
        let body = response.json::<serde_json::Value>();
        codes.insert(body["code"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 10);
}
