//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository traits, and the asynchronous access-count
//! pipeline, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`access_event`] - Resolution event model
//! - [`access_worker`] - Asynchronous access-count worker
//!
//! # Access Counting Flow
//!
//! 1. The redirect handler resolves a short code
//! 2. An [`access_event::AccessEvent`] is sent to a bounded channel
//! 3. [`access_worker::run_access_worker`] drains the channel
//! 4. Counters are bumped via [`repositories::StatsRepository`] with an
//!    atomic upsert-increment, so concurrent resolutions never lose updates

pub mod access_event;
pub mod access_worker;
pub mod entities;
pub mod repositories;
