//! Alias entity representing a short-code to URL mapping.

use chrono::{DateTime, Utc};

/// A stored alias: one short code mapped to one target URL.
///
/// The code is immutable once created; the target may be replaced by an
/// update but never duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub code: String,
    pub target: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Alias {
    pub fn new(
        code: String,
        target: String,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target,
            expires_at,
            created_at,
        }
    }

    /// Returns true if the alias is expired as of `now`.
    ///
    /// A record whose expiry equals `now` exactly is already expired; the
    /// comparison is at-or-after, and `now` is captured once by the caller
    /// so repeated checks within one operation agree.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Input data for creating a new alias.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub code: String,
    pub target: String,
    pub expires_at: Option<DateTime<Utc>>,
}
