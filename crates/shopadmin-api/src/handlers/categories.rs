//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::category::Category;
use shopadmin_service::category::{CreateCategoryInput, UpdateCategoryInput};

use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let page = state
        .category_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Categories listed", page)))
}

/// GET /api/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.category_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Category found", category)))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let category = state
        .category_service
        .create(
            &auth,
            CreateCategoryInput {
                tenant_id: req.tenant_id,
                name: req.name,
                description: req.description,
                image_url: req.image_url,
                display_order: req.display_order,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Category created", category)))
}

/// PATCH /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let category = state
        .category_service
        .update(
            &auth,
            id,
            UpdateCategoryInput {
                name: req.name,
                description: req.description,
                image_url: req.image_url,
                display_order: req.display_order,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Category updated", category)))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.category_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Category deleted",
        MessageResponse {
            message: "Category deleted".to_string(),
        },
    )))
}
