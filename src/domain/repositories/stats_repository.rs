//! Repository trait for per-alias access counters.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for access statistics.
///
/// A counter row exists iff its code has been resolved at least once;
/// absence reads as zero.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Creates-or-increments the access counter for `code`.
    ///
    /// Implementations must use an atomic upsert-increment, not a
    /// read-then-write pair; concurrent increments for the same code must
    /// all be counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_access(&self, code: &str) -> Result<(), AppError>;

    /// Returns the current access count for `code`, or 0 if the code has
    /// never been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn access_count(&self, code: &str) -> Result<i64, AppError>;
}
