//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching code→target mappings.
///
/// Implementations must be thread-safe and fail open: a broken cache
/// degrades to database lookups, it never takes the redirect path down
/// with it.
///
/// Only non-expired targets belong in the cache, and entries for aliases
/// with an expiry must carry a TTL no longer than the remaining lifetime;
/// the redirect handler computes that bound before storing.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached target URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_target(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores a code→target mapping with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `code` - The short code key
    /// - `target` - The URL to cache
    /// - `ttl_seconds` - Optional TTL override (implementation default if None)
    ///
    /// # Errors
    ///
    /// Implementations log failures and return `Ok(())` rather than
    /// disrupting the request flow.
    async fn set_target(&self, code: &str, target: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Removes a cached mapping. Used when an alias is updated or deleted.
    async fn invalidate(&self, code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
