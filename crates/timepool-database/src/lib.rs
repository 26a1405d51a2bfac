//! # timepool-database
//!
//! PostgreSQL connection pool management, migrations, and repository
//! implementations for TimePool. Repositories are thin typed wrappers over
//! sqlx queries; uniqueness rules are enforced by database constraints and
//! translated here into the domain error taxonomy.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
