//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// PostgreSQL repository for per-alias access counters.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn increment_access(&self, code: &str) -> Result<(), AppError> {
        // Single-statement upsert: concurrent increments for one code are
        // serialized by the row lock, never by a read-then-write pair.
        let result = sqlx::query(
            r#"
            INSERT INTO access_stats (code, count)
            VALUES ($1, 1)
            ON CONFLICT (code) DO UPDATE SET count = access_stats.count + 1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                if let Some(db) = e.as_database_error()
                    && db.is_foreign_key_violation()
                {
                    return Err(AppError::not_found(
                        "Short code not found",
                        json!({ "code": code }),
                    ));
                }
                Err(e.into())
            }
        }
    }

    async fn access_count(&self, code: &str) -> Result<i64, AppError> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT count FROM access_stats WHERE code = $1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(count.unwrap_or(0))
    }
}
