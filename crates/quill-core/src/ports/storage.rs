use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageError;

/// Location of a blob: `{owner}/{container}/{filename}`.
///
/// The container is the draft id while a content unit is edited and the
/// post id once it is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPath {
    pub owner_id: Uuid,
    pub container_id: Uuid,
    pub filename: String,
}

impl BlobPath {
    pub fn new(owner_id: Uuid, container_id: Uuid, filename: impl Into<String>) -> Self {
        Self {
            owner_id,
            container_id,
            filename: filename.into(),
        }
    }

    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.owner_id, self.container_id, self.filename)
    }
}

impl std::fmt::Display for BlobPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Object/blob store port.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Copy a blob from one path to another, overwriting the destination.
    async fn copy(&self, from: &BlobPath, to: &BlobPath) -> Result<(), StorageError>;

    /// Enumerate blob keys under a path prefix.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
