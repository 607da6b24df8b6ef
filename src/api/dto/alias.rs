//! DTOs for alias management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Alias;

/// Request body for `PATCH /api/aliases/{code}`.
///
/// Replaces the target URL; the code itself is immutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAliasRequest {
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

/// JSON representation of an alias returned by management endpoints.
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    pub code: String,
    pub target: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Alias> for AliasResponse {
    fn from(alias: Alias) -> Self {
        Self {
            code: alias.code,
            target: alias.target,
            expires_at: alias.expires_at,
            created_at: alias.created_at,
        }
    }
}
