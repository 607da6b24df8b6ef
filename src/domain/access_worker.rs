//! Background worker draining the access-event channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::access_event::AccessEvent;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Consumes access events and bumps the persistent counters.
///
/// Runs until the sending side of the channel is dropped. Each event is an
/// independent atomic upsert-increment; a failed increment is logged and
/// the worker moves on. An alias deleted between resolution and increment
/// surfaces as NotFound and is expected, not an error.
pub async fn run_access_worker<R: StatsRepository>(
    mut rx: mpsc::Receiver<AccessEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        match repository.increment_access(&event.code).await {
            Ok(()) => {}
            Err(AppError::NotFound { .. }) => {
                debug!(code = %event.code, "Access event for a deleted alias, dropped");
            }
            Err(e) => {
                warn!(
                    code = %event.code,
                    client_ip = ?event.client_ip,
                    "Failed to record access: {e}"
                );
            }
        }
    }
}
