//! Image upload handling.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use shopadmin_core::result::AppResult;
use shopadmin_storage::store::{ImageStore, StoredImage};

use crate::context::RequestContext;

/// Validates and stores uploaded images on behalf of the API layer.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<ImageStore>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(store: Arc<ImageStore>) -> Self {
        Self { store }
    }

    /// Stores an uploaded image after validation.
    pub async fn upload_image(&self, ctx: &RequestContext, data: Bytes) -> AppResult<StoredImage> {
        ctx.require_manager()?;

        let stored = self.store.store_image(data).await?;

        info!(
            key = %stored.key,
            size_bytes = stored.size_bytes,
            uploaded_by = %ctx.user_id,
            "Image uploaded"
        );

        Ok(stored)
    }

    /// Verifies the storage backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}
