//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls and
//! business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! - [`services::alias_service::AliasService`] - Shorten, resolve, update, remove
//! - [`services::stats_service::StatsService`] - Access counting
//! - [`throttle::ClientThrottle`] - Bounded per-client access tally

pub mod services;
pub mod throttle;
