//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened alias for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expires_at": "2027-01-01T00:00:00Z"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored alias:
///
/// ```json
/// {
///   "code": "b7Kp0aQ",
///   "short_url": "https://sn.ip/b7Kp0aQ",
///   "target": "https://example.com/some/long/path",
///   "expires_at": "2027-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or too long. Short-code
/// collisions are retried internally and never surface here.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let alias = state
        .alias_service
        .shorten(payload.url, payload.expires_at)
        .await?;

    let short_url = state.alias_service.short_url(&state.base_url, &alias.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: alias.code,
            short_url,
            target: alias.target,
            expires_at: alias.expires_at,
        }),
    ))
}
