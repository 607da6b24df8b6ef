//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid URL, at most 2048
    /// characters).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    /// Optional expiry timestamp. From this time on, resolving the code
    /// returns 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response body for a created alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub target: String,
    pub expires_at: Option<DateTime<Utc>>,
}
