#![allow(dead_code)]

use axum::extract::ConnectInfo;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

use linksnip::application::services::{AliasService, StatsService};
use linksnip::application::throttle::ClientThrottle;
use linksnip::codec::Codec;
use linksnip::domain::access_event::AccessEvent;
use linksnip::infrastructure::cache::NullCache;
use linksnip::infrastructure::persistence::{PgAliasRepository, PgStatsRepository};
use linksnip::state::AppState;

pub async fn create_test_alias(pool: &PgPool, code: &str, target: &str) {
    sqlx::query("INSERT INTO aliases (code, target) VALUES ($1, $2)")
        .bind(code)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_expired_alias(pool: &PgPool, code: &str, target: &str) {
    sqlx::query(
        "INSERT INTO aliases (code, target, expires_at) VALUES ($1, $2, NOW() - INTERVAL '1 hour')",
    )
    .bind(code)
    .bind(target)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn stat_row_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM access_stats WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<AccessEvent>) {
    create_test_state_with_throttle(pool, 1_000)
}

pub fn create_test_state_with_throttle(
    pool: PgPool,
    max_accesses: u64,
) -> (AppState, mpsc::Receiver<AccessEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let alias_repo = Arc::new(PgAliasRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgStatsRepository::new(pool.clone()));

    let alias_service = Arc::new(AliasService::new(alias_repo.clone(), Codec::default()));
    let stats_service = Arc::new(StatsService::new(alias_repo, stats_repo));

    let state = AppState {
        alias_service,
        stats_service,
        cache: Arc::new(NullCache),
        throttle: Arc::new(ClientThrottle::new(max_accesses, 1024)),
        access_sender: tx,
        db: pool,
        base_url: "http://localhost:3000".to_string(),
        behind_proxy: false,
    };

    (state, rx)
}

/// Drains pending access events and applies them synchronously, standing in
/// for the background worker which is not running under tests.
pub async fn apply_access_events(state: &AppState, rx: &mut mpsc::Receiver<AccessEvent>) {
    while let Ok(event) = rx.try_recv() {
        state.stats_service.record_access(&event.code).await.unwrap();
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`'s mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
