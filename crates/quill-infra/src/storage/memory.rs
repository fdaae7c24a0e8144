//! In-memory blob store - used as fallback when no storage root is
//! configured. Note: data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::error::StorageError;
use quill_core::ports::{BlobPath, BlobStore};

#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a blob directly. Used by upload paths and tests.
    pub async fn put(&self, path: &BlobPath, bytes: Vec<u8>) {
        self.blobs.write().await.insert(path.key(), bytes);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn copy(&self, from: &BlobPath, to: &BlobPath) -> Result<(), StorageError> {
        let mut blobs = self.blobs.write().await;
        let bytes = blobs
            .get(&from.key())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(from.key()))?;
        blobs.insert(to.key(), bytes);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let blobs = self.blobs.read().await;
        let mut keys: Vec<String> = blobs
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn copy_moves_bytes_between_containers() {
        let store = InMemoryBlobStore::new();
        let owner = Uuid::new_v4();
        let draft_id = Uuid::new_v4();
        let post_id = Uuid::new_v4();

        let from = BlobPath::new(owner, draft_id, "cover.png");
        let to = BlobPath::new(owner, post_id, "cover.png");
        store.put(&from, vec![1, 2, 3]).await;

        store.copy(&from, &to).await.unwrap();

        let listed = store.list(&format!("{owner}/{post_id}")).await.unwrap();
        assert_eq!(listed, vec![to.key()]);
        // The source stays behind.
        assert_eq!(store.list(&from.key()).await.unwrap(), vec![from.key()]);
    }

    #[tokio::test]
    async fn copy_of_missing_blob_fails() {
        let store = InMemoryBlobStore::new();
        let from = BlobPath::new(Uuid::new_v4(), Uuid::new_v4(), "missing.png");
        let to = BlobPath::new(Uuid::new_v4(), Uuid::new_v4(), "missing.png");

        let err = store.copy(&from, &to).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}
