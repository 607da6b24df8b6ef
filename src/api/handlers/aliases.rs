//! Handlers for alias management endpoints (update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::alias::{AliasResponse, UpdateAliasRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Replaces the target URL of an existing alias.
///
/// # Endpoint
///
/// `PATCH /api/aliases/{code}`
///
/// The cached mapping is invalidated so the next redirect serves the new
/// target.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed URL and 404 Not Found for an
/// unknown code.
pub async fn update_alias_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateAliasRequest>,
) -> Result<Json<AliasResponse>, AppError> {
    payload.validate()?;

    let alias = state
        .alias_service
        .update_target(&code, &payload.url)
        .await?;

    let _ = state.cache.invalidate(&code).await;

    Ok(Json(alias.into()))
}

/// Removes an alias and its access counter.
///
/// # Endpoint
///
/// `DELETE /api/aliases/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn delete_alias_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.alias_service.remove(&code).await?;

    let _ = state.cache.invalidate(&code).await;

    Ok(StatusCode::NO_CONTENT)
}
