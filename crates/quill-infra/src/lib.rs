//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database repositories, blob stores, and the
//! token service.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL support via SeaORM
//! - `auth` - JWT token validation

pub mod database;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{
    DatabaseConfig, InMemoryCategoryRepository, InMemoryDraftRepository, InMemoryPostRepository,
};
pub use storage::{FsBlobStore, InMemoryBlobStore};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConnection, PostgresCategoryRepository, PostgresDraftRepository, PostgresPostRepository,
};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
