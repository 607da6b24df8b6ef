//! Handler for alias access statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the access count of a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// { "code": "b7Kp0aQ", "access_count": 42 }
/// ```
///
/// An alias that exists but was never resolved reports 0.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let access_count = state.stats_service.access_count(&code).await?;

    Ok(Json(StatsResponse { code, access_count }))
}
