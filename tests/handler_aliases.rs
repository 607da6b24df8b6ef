mod common;

use axum::{
    Router,
    routing::{get, patch},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use common::MockConnectInfoLayer;
use linksnip::api::handlers::{delete_alias_handler, redirect_handler, update_alias_handler};
use linksnip::state::AppState;

fn alias_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route(
            "/api/aliases/{code}",
            patch(update_alias_handler).delete(delete_alias_handler),
        )
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

#[sqlx::test]
async fn test_update_changes_redirect_target(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(alias_app(state)).unwrap();

    common::create_test_alias(&pool, "upd1", "https://example.com/old").await;

    let response = server
        .patch("/api/aliases/upd1")
        .json(&json!({ "url": "https://example.com/new" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "upd1");
    assert_eq!(body["target"], "https://example.com/new");

    let redirect = server.get("/upd1").await;
    assert_eq!(redirect.header("location"), "https://example.com/new");
}

#[sqlx::test]
async fn test_update_rejects_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(alias_app(state)).unwrap();

    common::create_test_alias(&pool, "upd2", "https://example.com").await;

    let response = server
        .patch("/api/aliases/upd2")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_update_unknown_code(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(alias_app(state)).unwrap();

    let response = server
        .patch("/api/aliases/missing")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_delete_then_resolve_is_not_found(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(alias_app(state.clone())).unwrap();

    common::create_test_alias(&pool, "del1", "https://example.com").await;

    // Resolve once so a counter row exists before the delete.
    assert_eq!(server.get("/del1").await.status_code(), 307);
    common::apply_access_events(&state, &mut rx).await;
    assert_eq!(common::stat_row_count(&pool, "del1").await, 1);

    let response = server.delete("/api/aliases/del1").await;
    assert_eq!(response.status_code(), 204);

    assert_eq!(server.get("/del1").await.status_code(), 404);
    assert_eq!(common::stat_row_count(&pool, "del1").await, 0);
}

#[sqlx::test]
async fn test_delete_unknown_code(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(alias_app(state)).unwrap();

    let response = server.delete("/api/aliases/missing").await;

    assert_eq!(response.status_code(), 404);
}
