//! API route configuration.

use crate::api::handlers::{
    delete_alias_handler, shorten_handler, stats_handler, update_alias_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Management API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `POST   /shorten`         - Create a shortened alias
/// - `GET    /stats/{code}`    - Access count for an alias
/// - `PATCH  /aliases/{code}`  - Replace the target URL
/// - `DELETE /aliases/{code}`  - Remove an alias (and its counter)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route(
            "/aliases/{code}",
            patch(update_alias_handler).delete(delete_alias_handler),
        )
}
