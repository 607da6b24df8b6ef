//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AliasService, StatsService};
use crate::application::throttle::ClientThrottle;
use crate::domain::access_event::AccessEvent;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgAliasRepository, PgStatsRepository};

/// Handler-facing view of the composed application.
///
/// Built once in `server::run` and cloned per request (all fields are
/// cheaply cloneable handles).
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService<PgAliasRepository>>,
    pub stats_service: Arc<StatsService<PgAliasRepository, PgStatsRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub throttle: Arc<ClientThrottle>,
    pub access_sender: mpsc::Sender<AccessEvent>,
    pub db: Arc<PgPool>,
    pub base_url: String,
    /// When true, the client IP for throttling is read from
    /// X-Forwarded-For / X-Real-IP headers. Enable only behind a trusted
    /// reverse proxy.
    pub behind_proxy: bool,
}
