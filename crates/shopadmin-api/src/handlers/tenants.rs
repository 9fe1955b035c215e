//! Tenant administration handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::tenant::Tenant;
use shopadmin_service::tenant::{CreateTenantInput, UpdateTenantInput};

use crate::dto::request::{CreateTenantRequest, UpdateTenantRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/tenants
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<Tenant>>>, ApiError> {
    let page = state
        .tenant_service
        .list(&auth, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Tenants listed", page)))
}

/// GET /api/tenants/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    let tenant = state.tenant_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Tenant found", tenant)))
}

/// POST /api/tenants
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTenantRequest>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let tenant = state
        .tenant_service
        .create(
            &auth,
            CreateTenantInput {
                name: req.name,
                display_name: req.display_name,
                contact_email: req.contact_email,
                logo_url: req.logo_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Tenant created", tenant)))
}

/// PATCH /api/tenants/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTenantRequest>,
) -> Result<Json<ApiResponse<Tenant>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let tenant = state
        .tenant_service
        .update(
            &auth,
            id,
            UpdateTenantInput {
                display_name: req.display_name,
                contact_email: req.contact_email,
                status: req.status,
                logo_url: req.logo_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Tenant updated", tenant)))
}

/// DELETE /api/tenants/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tenant_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Tenant deleted",
        MessageResponse {
            message: "Tenant deleted".to_string(),
        },
    )))
}
