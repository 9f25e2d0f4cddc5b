//! # folderhub-database
//!
//! SQLite connection management and concrete repository implementations
//! for all FolderHub entities.
//!
//! Repositories are stateless: every query takes the connection or
//! transaction it should run on, so callers decide the transaction scope.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
