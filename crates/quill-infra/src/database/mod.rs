//! Database adapters: SeaORM/Postgres repositories and the in-memory
//! fallback used when no database is configured (and in tests).

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;

#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryCategoryRepository, InMemoryDraftRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnection;

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresCategoryRepository, PostgresDraftRepository, PostgresPostRepository,
};
