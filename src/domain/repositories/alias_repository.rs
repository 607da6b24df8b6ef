//! Repository trait for alias record data access.

use crate::domain::entities::{Alias, NewAlias};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias records.
///
/// The backing store provides primary-key uniqueness on `code`; under
/// concurrent creates for the same code exactly one call succeeds and the
/// rest fail with [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new alias record.
    ///
    /// Codes are never silently overwritten: inserting an existing code is
    /// a conflict, which the caller recovers from by retrying with a fresh
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn create(&self, new_alias: NewAlias) -> Result<Alias, AppError>;

    /// Looks up an alias by its short code. Does not mutate state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError>;

    /// Returns true iff the code has an expiry at or before the current
    /// time. Codes with no expiry, and codes that do not exist, report
    /// false; existence is the caller's concern, checked via
    /// [`Self::find_by_code`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn is_expired(&self, code: &str) -> Result<bool, AppError>;

    /// Replaces the target URL of an existing alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist (a silent
    /// no-op would hide caller bugs).
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_target(&self, code: &str, new_target: &str) -> Result<Alias, AppError>;

    /// Removes an alias record, cascading to its access-stat row.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if the code
    /// did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
