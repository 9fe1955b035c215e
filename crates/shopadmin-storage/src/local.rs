//! Local filesystem storage backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;

use crate::provider::ImageStorageProvider;

/// Stores images under a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalImageStorage {
    /// Create a new local backend rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean = key.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStorageProvider for LocalImageStorage {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, key: &str, data: Bytes, _content_type: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: {key}"),
                e,
            )
        })?;

        debug!(key, bytes = data.len(), "Wrote object");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {key}"),
                    e,
                )
            })?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.resolve(key).exists())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_exists_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0]);
        storage
            .put("uploads/a/b.jpg", data, "image/jpeg")
            .await
            .unwrap();
        assert!(storage.exists("uploads/a/b.jpg").await.unwrap());

        storage.delete("uploads/a/b.jpg").await.unwrap();
        assert!(!storage.exists("uploads/a/b.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(storage.delete("does/not/exist.png").await.is_ok());
    }

    #[tokio::test]
    async fn health_check_reports_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(storage.health_check().await.unwrap());
    }
}
