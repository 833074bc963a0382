//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post repository via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod storage;

// Re-exports - In-Memory / local
pub use database::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};
pub use storage::LocalFileStorage;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
