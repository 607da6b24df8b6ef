//! Alias creation, resolution, and maintenance service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::json;
use tracing::debug;

use crate::codec::Codec;
use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// Attempts before giving up on finding an unused random key.
///
/// A collision in the 63-bit key space is already unlikely at the birthday
/// bound; ten consecutive collisions indicate something is wrong with the
/// store rather than bad luck.
const MAX_KEY_ATTEMPTS: usize = 10;

/// Service for creating and resolving short aliases.
///
/// Owns the base-62 [`Codec`]; the alphabet it encodes into is fixed at
/// construction and never mutated afterwards.
pub struct AliasService<R: AliasRepository> {
    repository: Arc<R>,
    codec: Codec,
}

impl<R: AliasRepository> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>, codec: Codec) -> Self {
        Self { repository, codec }
    }

    /// Shortens a target URL, returning the stored alias.
    ///
    /// Draws a uniformly random non-negative 63-bit key, encodes it, and
    /// attempts the insert. A duplicate code is not an error of this
    /// operation: the key is redrawn and the insert retried, up to
    /// [`MAX_KEY_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every attempt collided, and
    /// propagates storage errors as-is.
    pub async fn shorten(
        &self,
        target: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Alias, AppError> {
        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let key: i64 = rand::rng().random_range(0..=i64::MAX);
            let code = self.codec.encode(key)?;

            match self
                .repository
                .create(NewAlias {
                    code,
                    target: target.clone(),
                    expires_at,
                })
                .await
            {
                Ok(alias) => return Ok(alias),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Short code collision, retrying with a fresh key");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_KEY_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its alias record.
    ///
    /// Expiration is checked against a single `now` captured here, so a
    /// record expiring exactly at the moment of the call is reported as
    /// gone, not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Gone`] for expired ones.
    pub async fn resolve(&self, code: &str) -> Result<Alias, AppError> {
        let alias = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))?;

        let now = Utc::now();
        if alias.is_expired_at(now) {
            return Err(AppError::gone(
                "Short link has expired",
                json!({ "code": code, "expired_at": alias.expires_at }),
            ));
        }

        Ok(alias)
    }

    /// Replaces the target URL of an existing alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn update_target(&self, code: &str, new_target: &str) -> Result<Alias, AppError> {
        self.repository.update_target(code, new_target).await
    }

    /// Removes an alias and, by cascade, its access counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn remove(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short code not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
