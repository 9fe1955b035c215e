//! Image upload handlers.

use axum::Json;
use axum::extract::{Multipart, State};

use shopadmin_core::error::AppError;
use shopadmin_storage::StoredImage;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/uploads/images
///
/// Accepts a multipart form with a single `file` field and stores the
/// image under the configured provider.
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<StoredImage>>, ApiError> {
    let mut file_data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            file_data = Some(data);
            break;
        }
    }

    let data = file_data
        .ok_or_else(|| AppError::validation("Missing multipart field 'file'"))?;

    let stored = state.upload_service.upload_image(&auth, data).await?;
    Ok(Json(ApiResponse::ok("Image uploaded", stored)))
}
