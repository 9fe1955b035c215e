//! High-level image store: validation, key generation, backend dispatch.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use shopadmin_core::config::{StorageConfig, StorageProviderKind};
use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;

use crate::local::LocalImageStorage;
use crate::provider::ImageStorageProvider;
use crate::sniff::ImageFormat;

/// Result of a successful image upload.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredImage {
    /// Storage key relative to the backend root.
    pub key: String,
    /// Public URL the image is served from.
    pub url: String,
    /// Detected MIME type.
    pub content_type: String,
    /// Payload size in bytes.
    pub size_bytes: u64,
}

/// Validates and stores uploaded images on the configured backend.
#[derive(Clone)]
pub struct ImageStore {
    provider: Arc<dyn ImageStorageProvider>,
    public_base_url: String,
    key_prefix: String,
    max_image_bytes: u64,
}

impl ImageStore {
    /// Builds the store from configuration, initializing the backend.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn ImageStorageProvider> = match config.provider {
            StorageProviderKind::Local => {
                Arc::new(LocalImageStorage::new(&config.data_root).await?)
            }
            #[cfg(feature = "s3")]
            StorageProviderKind::S3 => Arc::new(crate::s3::S3ImageStorage::new(&config.s3).await?),
            #[cfg(not(feature = "s3"))]
            StorageProviderKind::S3 => {
                return Err(AppError::configuration(
                    "server was built without S3 support",
                ));
            }
        };

        info!(provider = provider.provider_type(), "Image store ready");

        Ok(Self {
            provider,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            key_prefix: config.s3.key_prefix.trim_matches('/').to_string(),
            max_image_bytes: config.max_image_bytes,
        })
    }

    /// Wraps an existing backend. Used by tests.
    pub fn with_provider(
        provider: Arc<dyn ImageStorageProvider>,
        public_base_url: &str,
        key_prefix: &str,
        max_image_bytes: u64,
    ) -> Self {
        Self {
            provider,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            key_prefix: key_prefix.trim_matches('/').to_string(),
            max_image_bytes,
        }
    }

    /// Validates and stores an uploaded image.
    ///
    /// The payload must be non-empty, within the configured size limit,
    /// and carry a recognized image signature. The client-supplied
    /// content type is ignored.
    pub async fn store_image(&self, data: Bytes) -> AppResult<StoredImage> {
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() as u64 > self.max_image_bytes {
            return Err(AppError::validation(format!(
                "Image exceeds the maximum allowed size of {} bytes",
                self.max_image_bytes
            )));
        }

        let format = ImageFormat::sniff(&data).ok_or_else(|| {
            AppError::validation("Unsupported image format (expected PNG, JPEG, GIF, or WebP)")
        })?;

        let key = self.generate_key(format);
        let size_bytes = data.len() as u64;
        self.provider.put(&key, data, format.mime_type()).await?;

        info!(key, size_bytes, content_type = format.mime_type(), "Stored image");

        Ok(StoredImage {
            url: self.public_url(&key),
            key,
            content_type: format.mime_type().to_string(),
            size_bytes,
        })
    }

    /// Deletes a previously stored image by key.
    pub async fn delete_image(&self, key: &str) -> AppResult<()> {
        self.provider.delete(key).await
    }

    /// Verifies the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Generates a collision-free key partitioned by year/month.
    fn generate_key(&self, format: ImageFormat) -> String {
        let partition = Utc::now().format("%Y/%m");
        format!(
            "{}/{}/{}.{}",
            self.key_prefix,
            partition,
            Uuid::new_v4(),
            format.extension()
        )
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn local_store(max_bytes: u64) -> (tempfile::TempDir, ImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalImageStorage::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let store =
            ImageStore::with_provider(Arc::new(provider), "/static/", "uploads", max_bytes);
        (dir, store)
    }

    fn png_payload() -> Bytes {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&[0u8; 32]);
        Bytes::from(data)
    }

    #[tokio::test]
    async fn stores_valid_png() {
        let (_dir, store) = local_store(1024).await;
        let stored = store.store_image(png_payload()).await.unwrap();

        assert!(stored.key.starts_with("uploads/"));
        assert!(stored.key.ends_with(".png"));
        assert_eq!(stored.content_type, "image/png");
        assert_eq!(stored.url, format!("/static/{}", stored.key));
    }

    #[tokio::test]
    async fn rejects_oversized_payload() {
        let (_dir, store) = local_store(8).await;
        let err = store.store_image(png_payload()).await.unwrap_err();
        assert!(err.message.contains("maximum allowed size"));
    }

    #[tokio::test]
    async fn rejects_unrecognized_signature() {
        let (_dir, store) = local_store(1024).await;
        let err = store
            .store_image(Bytes::from_static(b"#!/bin/sh\nrm -rf /"))
            .await
            .unwrap_err();
        assert!(err.message.contains("Unsupported image format"));
    }

    #[tokio::test]
    async fn rejects_empty_payload() {
        let (_dir, store) = local_store(1024).await;
        assert!(store.store_image(Bytes::new()).await.is_err());
    }

    #[tokio::test]
    async fn delete_round_trip() {
        let (_dir, store) = local_store(1024).await;
        let stored = store.store_image(png_payload()).await.unwrap();
        store.delete_image(&stored.key).await.unwrap();
    }
}
