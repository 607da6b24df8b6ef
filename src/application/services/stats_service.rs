//! Access statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::{AliasRepository, StatsRepository};
use crate::error::AppError;

/// Service for recording and reading per-alias access counts.
pub struct StatsService<A: AliasRepository, S: StatsRepository> {
    alias_repository: Arc<A>,
    stats_repository: Arc<S>,
}

impl<A: AliasRepository, S: StatsRepository> StatsService<A, S> {
    /// Creates a new statistics service.
    pub fn new(alias_repository: Arc<A>, stats_repository: Arc<S>) -> Self {
        Self {
            alias_repository,
            stats_repository,
        }
    }

    /// Records one access of `code`.
    ///
    /// In production this runs on the background worker fed by the redirect
    /// handler's channel; it is also exposed directly for callers that need
    /// a synchronous increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    pub async fn record_access(&self, code: &str) -> Result<(), AppError> {
        self.stats_repository.increment_access(code).await
    }

    /// Returns the access count for an existing alias.
    ///
    /// An alias that was never resolved reports 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn access_count(&self, code: &str) -> Result<i64, AppError> {
        if self.alias_repository.find_by_code(code).await?.is_none() {
            return Err(AppError::not_found(
                "Short code not found",
                json!({ "code": code }),
            ));
        }

        self.stats_repository.access_count(code).await
    }
}
