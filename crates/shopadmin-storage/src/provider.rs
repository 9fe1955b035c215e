//! Storage backend abstraction.

use async_trait::async_trait;
use bytes::Bytes;

use shopadmin_core::result::AppResult;

/// A backend capable of storing and deleting image objects by key.
///
/// Keys are relative paths such as `uploads/2026/08/<uuid>.png`.
#[async_trait]
pub trait ImageStorageProvider: Send + Sync {
    /// Short backend identifier used in logs ("local", "s3").
    fn provider_type(&self) -> &str;

    /// Writes an object, creating any missing parents.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// Deletes an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Checks whether an object exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Verifies the backend is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;
}
