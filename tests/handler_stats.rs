mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use common::MockConnectInfoLayer;
use linksnip::api::handlers::{redirect_handler, stats_handler};

#[sqlx::test]
async fn test_stats_zero_for_unresolved_alias(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::create_test_alias(&pool, "quiet1", "https://example.com").await;

    let response = server.get("/api/stats/quiet1").await;

    assert_eq!(response.status_code(), 200);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "quiet1");
    assert_eq!(body["access_count"], 0);
}

#[sqlx::test]
async fn test_stats_unknown_code(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats/doesNotExist").await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_stats_reflect_accesses(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state.clone());
    let server = TestServer::new(app).unwrap();

    common::create_test_alias(&pool, "pop1", "https://example.com").await;

    for _ in 0..5 {
        let response = server.get("/pop1").await;
        assert_eq!(response.status_code(), 307);
    }
    common::apply_access_events(&state, &mut rx).await;

    let response = server.get("/api/stats/pop1").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["access_count"], 5);
}
