//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlobStore, CategoryRepository, DraftRepository, PostRepository};
use quill_core::service::{CategoryService, PublicationService};
use quill_infra::{
    FsBlobStore, InMemoryBlobStore, InMemoryCategoryRepository, InMemoryDraftRepository,
    InMemoryPostRepository,
};

use crate::config::AppConfig;

type Repos = (
    Arc<dyn DraftRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn CategoryRepository>,
);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub publication: Arc<PublicationService>,
    pub categories: Arc<CategoryService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let blobs: Arc<dyn BlobStore> = match &config.storage_root {
            Some(root) => {
                tracing::info!(root = %root.display(), "using filesystem blob store");
                Arc::new(FsBlobStore::new(root.clone()))
            }
            None => {
                tracing::warn!("BLOB_STORAGE_ROOT not set - cover images stored in memory");
                Arc::new(InMemoryBlobStore::new())
            }
        };

        #[cfg(feature = "postgres")]
        let (drafts, posts, categories): Repos = {
            if let Some(db_config) = &config.database {
                match quill_infra::DatabaseConnection::init(db_config).await {
                    Ok(conn) => (
                        Arc::new(quill_infra::PostgresDraftRepository::new(conn.main.clone())),
                        Arc::new(quill_infra::PostgresPostRepository::new(conn.main.clone())),
                        Arc::new(quill_infra::PostgresCategoryRepository::new(conn.main)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (drafts, posts, categories): Repos = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            memory_repos()
        };

        let publication = Arc::new(PublicationService::new(
            drafts,
            posts.clone(),
            categories.clone(),
            blobs,
        ));
        let categories = Arc::new(CategoryService::new(categories));

        tracing::info!("Application state initialized");

        Self {
            posts,
            publication,
            categories,
        }
    }
}

fn memory_repos() -> Repos {
    (
        Arc::new(InMemoryDraftRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryCategoryRepository::new()),
    )
}
