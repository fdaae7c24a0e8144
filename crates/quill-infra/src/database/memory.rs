//! In-memory repositories - used as fallback when no database is configured.
//!
//! They mirror the real tables' constraints (post and category slug
//! uniqueness) so behavior matches the Postgres adapters. Data is lost on
//! process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Category, Draft, Post};
use quill_core::error::RepoError;
use quill_core::ports::{
    BaseRepository, CategoryRepository, DraftRepository, PostRepository,
};

#[derive(Default)]
pub struct InMemoryDraftRepository {
    store: RwLock<HashMap<Uuid, Draft>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Draft, Uuid> for InMemoryDraftRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Draft>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Draft) -> Result<Draft, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::UniqueViolation("drafts_pkey".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Draft) -> Result<Draft, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Draft>, RepoError> {
        let mut drafts: Vec<Draft> = self
            .store
            .read()
            .await
            .values()
            .filter(|d| d.author_id == author_id)
            .cloned()
            .collect();
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drafts)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.values().any(|p| p.slug == entity.slug) {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        if store
            .values()
            .any(|p| p.id != entity.id && p.slug == entity.slug)
        {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn list_published(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .await
            .values()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    store: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Category) -> Result<Category, RepoError> {
        let mut store = self.store.write().await;
        if store.values().any(|c| c.slug == entity.slug) {
            return Err(RepoError::UniqueViolation("categories_slug_key".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Category) -> Result<Category, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        if store
            .values()
            .any(|c| c.id != entity.id && c.slug == entity.slug)
        {
            return Err(RepoError::UniqueViolation("categories_slug_key".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, RepoError> {
        let mut categories: Vec<Category> =
            self.store.read().await.values().cloned().collect();
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }
}
