//! DTO for the statistics endpoint.

use serde::Serialize;

/// Response body for `GET /api/stats/{code}`.
///
/// `access_count` is 0 for an alias that has never been resolved.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub access_count: i64,
}
