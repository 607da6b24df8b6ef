//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{AliasService, StatsService};
use crate::application::throttle::ClientThrottle;
use crate::codec::Codec;
use crate::config::Config;
use crate::domain::access_worker::run_access_worker;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{PgAliasRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache (or NullCache fallback)
/// - Background access-count worker
/// - Per-client throttle
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let (access_tx, access_rx) = mpsc::channel(config.access_queue_capacity);

    let pool = Arc::new(pool);
    let alias_repository = Arc::new(PgAliasRepository::new(pool.clone()));
    let stats_repository = Arc::new(PgStatsRepository::new(pool.clone()));

    tokio::spawn(run_access_worker(access_rx, stats_repository.clone()));
    tracing::info!("Access worker started");

    let codec = Codec::new(config.alphabet()?);
    let alias_service = Arc::new(AliasService::new(alias_repository.clone(), codec));
    let stats_service = Arc::new(StatsService::new(alias_repository, stats_repository));
    let throttle = Arc::new(ClientThrottle::new(
        config.throttle_max_accesses,
        config.throttle_client_capacity,
    ));

    let state = AppState {
        alias_service,
        stats_service,
        cache,
        throttle,
        access_sender: access_tx,
        db: pool,
        base_url: config.base_url.clone(),
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
