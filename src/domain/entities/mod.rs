//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without I/O. Creation input is carried
//! by a separate `NewAlias` struct, mirroring the stored/new split used for
//! records throughout the crate.

pub mod alias;

pub use alias::{Alias, NewAlias};
