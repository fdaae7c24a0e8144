use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Draft, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` and `update` are distinct because entity ids are generated in
/// the domain layer; the store cannot infer which one is meant.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. A uniqueness conflict surfaces as
    /// `RepoError::UniqueViolation`.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity in place.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Draft repository with author-scoped lookups.
#[async_trait]
pub trait DraftRepository: BaseRepository<Draft, Uuid> {
    /// All drafts owned by an author, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Draft>, RepoError>;
}

/// Post repository with the public read paths.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// All published posts, newest first.
    async fn list_published(&self) -> Result<Vec<Post>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// All categories ordered by `sort_order`.
    async fn list_all(&self) -> Result<Vec<Category>, RepoError>;
}
