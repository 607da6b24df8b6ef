//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`AliasRepository`] - Alias record CRUD
//! - [`StatsRepository`] - Access counters
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod alias_repository;
pub mod stats_repository;

pub use alias_repository::AliasRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
