//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("This draft is already published")]
    AlreadyPublished,

    #[error("This post is not published")]
    NotPublished,

    #[error("A {entity} with this slug already exists: {slug}")]
    DuplicateSlug { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Store failure: {0}")]
    Store(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Wrap a repository error as a generic store failure, logging it with
    /// an operation tag. Duplicate-slug handling happens at the call site,
    /// where the entity being inserted is known.
    pub fn store(op: &'static str, err: RepoError) -> Self {
        tracing::error!(operation = op, error = %err, "store operation failed");
        Self::Store(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Blob storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}
