//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx.
//!
//! - [`PgAliasRepository`] - Alias storage and retrieval
//! - [`PgStatsRepository`] - Access counters

pub mod pg_alias_repository;
pub mod pg_stats_repository;

pub use pg_alias_repository::PgAliasRepository;
pub use pg_stats_repository::PgStatsRepository;
