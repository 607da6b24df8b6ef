//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde_json::json;
use std::net::SocketAddr;
use tracing::error;

use crate::domain::access_event::AccessEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the target (DB query on miss, async cache refill)
/// 2. Check expiration (part of resolution on the DB path; the cache only
///    ever holds unexpired targets with a lifetime-bounded TTL)
/// 3. Send an access event to the background counter worker
/// 4. Apply the per-client throttle
/// 5. Return 307 Temporary Redirect
///
/// # Access Counting
///
/// Events ride a bounded channel; a full queue drops the event rather than
/// delaying the redirect (fire-and-forget).
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes, 410 Gone for expired ones, and
/// 429 Too Many Requests once the client exceeds its access allowance.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let target = match state.cache.get_target(&code).await {
        Ok(Some(cached)) => cached,
        Ok(None) => {
            let alias = state.alias_service.resolve(&code).await?;

            // Never let a cache entry outlive its alias.
            let ttl = alias
                .expires_at
                .map(|expires_at| (expires_at - Utc::now()).num_seconds().max(1) as u64);

            // Asynchronously update cache (fire-and-forget)
            let cache = state.cache.clone();
            let cached_code = code.clone();
            let cached_target = alias.target.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_target(&cached_code, &cached_target, ttl).await {
                    error!("Failed to cache target: {}", e);
                }
            });

            alias.target
        }
        Err(e) => {
            error!("Cache error: {}", e);

            // Fall back to database on cache error
            state.alias_service.resolve(&code).await?.target
        }
    };

    let client = client_ip(&headers, addr, state.behind_proxy);

    // Count the access first, then enforce the allowance: a blocked client
    // still shows up in the alias statistics.
    let _ = state
        .access_sender
        .try_send(AccessEvent::new(code.clone(), Some(client.clone())));

    if !state.throttle.hit(&client) {
        return Err(AppError::throttled(
            "Access allowance exceeded",
            json!({ "code": code }),
        ));
    }

    Ok(Redirect::temporary(&target))
}
