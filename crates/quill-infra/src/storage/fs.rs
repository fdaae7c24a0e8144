//! Filesystem-backed blob store.
//!
//! Keys map directly onto paths under a configured root directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use quill_core::error::StorageError;
use quill_core::ports::{BlobPath, BlobStore};

pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &BlobPath) -> PathBuf {
        self.root
            .join(path.owner_id.to_string())
            .join(path.container_id.to_string())
            .join(&path.filename)
    }
}

fn io_err(err: std::io::Error) -> StorageError {
    StorageError::Io(err.to_string())
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn copy(&self, from: &BlobPath, to: &BlobPath) -> Result<(), StorageError> {
        let src = self.resolve(from);
        if !src.exists() {
            return Err(StorageError::NotFound(from.key()));
        }

        let dst = self.resolve(to);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        fs::copy(&src, &dst).await.map_err(io_err)?;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let dir = self.root.join(prefix);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        collect_keys(&dir, prefix, &mut keys).await?;
        keys.sort();
        Ok(keys)
    }
}

/// Walk one directory level and record `{prefix}/{name}` keys for files,
/// recursing into subdirectories.
async fn collect_keys(
    dir: &Path,
    prefix: &str,
    keys: &mut Vec<String>,
) -> Result<(), StorageError> {
    let mut stack = vec![(dir.to_path_buf(), prefix.to_string())];

    while let Some((dir, prefix)) = stack.pop() {
        let mut entries = fs::read_dir(&dir).await.map_err(io_err)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let key = format!("{prefix}/{name}");
            let file_type = entry.file_type().await.map_err(io_err)?;
            if file_type.is_dir() {
                stack.push((entry.path(), key));
            } else {
                keys.push(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_root() -> PathBuf {
        std::env::temp_dir().join(format!("quill-blob-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn copy_creates_destination_tree() {
        let root = scratch_root();
        let store = FsBlobStore::new(&root);
        let owner = Uuid::new_v4();
        let draft_id = Uuid::new_v4();
        let post_id = Uuid::new_v4();

        let from = BlobPath::new(owner, draft_id, "cover.png");
        let src = store.resolve(&from);
        fs::create_dir_all(src.parent().unwrap()).await.unwrap();
        fs::write(&src, b"image-bytes").await.unwrap();

        let to = BlobPath::new(owner, post_id, "cover.png");
        store.copy(&from, &to).await.unwrap();

        let copied = fs::read(store.resolve(&to)).await.unwrap();
        assert_eq!(copied, b"image-bytes");

        let listed = store.list(&format!("{owner}/{post_id}")).await.unwrap();
        assert_eq!(listed, vec![to.key()]);

        fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn missing_source_reports_not_found() {
        let root = scratch_root();
        let store = FsBlobStore::new(&root);
        let from = BlobPath::new(Uuid::new_v4(), Uuid::new_v4(), "nope.png");
        let to = BlobPath::new(Uuid::new_v4(), Uuid::new_v4(), "nope.png");

        let err = store.copy(&from, &to).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn listing_unknown_prefix_is_empty() {
        let store = FsBlobStore::new(scratch_root());
        assert!(store.list("nobody/nothing").await.unwrap().is_empty());
    }
}
