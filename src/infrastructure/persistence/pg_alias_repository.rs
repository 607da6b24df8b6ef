//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// PostgreSQL repository for alias records.
///
/// Relies on the primary key of `aliases.code` for insert-if-absent
/// semantics: concurrent creates for one code are decided by the database,
/// not by application logic.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AliasRow {
    code: String,
    target: String,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<AliasRow> for Alias {
    fn from(row: AliasRow) -> Self {
        Alias::new(row.code, row.target, row.expires_at, row.created_at)
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn create(&self, new_alias: NewAlias) -> Result<Alias, AppError> {
        let row: AliasRow = sqlx::query_as(
            r#"
            INSERT INTO aliases (code, target, expires_at)
            VALUES ($1, $2, $3)
            RETURNING code, target, expires_at, created_at
            "#,
        )
        .bind(&new_alias.code)
        .bind(&new_alias.target)
        .bind(new_alias.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError> {
        let row: Option<AliasRow> = sqlx::query_as(
            r#"
            SELECT code, target, expires_at, created_at
            FROM aliases
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn is_expired(&self, code: &str) -> Result<bool, AppError> {
        let expires_at: Option<Option<DateTime<Utc>>> =
            sqlx::query_scalar("SELECT expires_at FROM aliases WHERE code = $1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(expires_at
            .flatten()
            .is_some_and(|expires_at| Utc::now() >= expires_at))
    }

    async fn update_target(&self, code: &str, new_target: &str) -> Result<Alias, AppError> {
        let row: Option<AliasRow> = sqlx::query_as(
            r#"
            UPDATE aliases
            SET target = $2
            WHERE code = $1
            RETURNING code, target, expires_at, created_at
            "#,
        )
        .bind(code)
        .bind(new_target)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into).ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        // The access_stats row goes with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM aliases WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
