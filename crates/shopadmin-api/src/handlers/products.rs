//! Product handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::product::Product;
use shopadmin_service::product::{CreateProductInput, UpdateProductInput};

use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let page = state
        .product_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Products listed", page)))
}

/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.product_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Product found", product)))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let product = state
        .product_service
        .create(
            &auth,
            CreateProductInput {
                tenant_id: req.tenant_id,
                category_id: req.category_id,
                name: req.name,
                description: req.description,
                sku: req.sku,
                price_cents: req.price_cents,
                currency: req.currency,
                stock_quantity: req.stock_quantity,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Product created", product)))
}

/// PATCH /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let product = state
        .product_service
        .update(
            &auth,
            id,
            UpdateProductInput {
                category_id: req.category_id,
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                currency: req.currency,
                stock_quantity: req.stock_quantity,
                image_url: req.image_url,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Product updated", product)))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.product_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Product deleted",
        MessageResponse {
            message: "Product deleted".to_string(),
        },
    )))
}
