//! Home page setting handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::home_setting::HomeSetting;
use shopadmin_service::home_setting::{CreateHomeSettingInput, UpdateHomeSettingInput};

use crate::dto::request::{CreateHomeSettingRequest, UpdateHomeSettingRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/home-settings
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<HomeSetting>>>, ApiError> {
    let page = state
        .home_setting_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Home settings listed", page)))
}

/// GET /api/home-settings/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<HomeSetting>>, ApiError> {
    let setting = state.home_setting_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Home setting found", setting)))
}

/// POST /api/home-settings
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateHomeSettingRequest>,
) -> Result<Json<ApiResponse<HomeSetting>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let setting = state
        .home_setting_service
        .create(
            &auth,
            CreateHomeSettingInput {
                tenant_id: req.tenant_id,
                section: req.section,
                title: req.title,
                subtitle: req.subtitle,
                image_url: req.image_url,
                link_url: req.link_url,
                display_order: req.display_order,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Home setting created", setting)))
}

/// PATCH /api/home-settings/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateHomeSettingRequest>,
) -> Result<Json<ApiResponse<HomeSetting>>, ApiError> {
    let setting = state
        .home_setting_service
        .update(
            &auth,
            id,
            UpdateHomeSettingInput {
                title: req.title,
                subtitle: req.subtitle,
                image_url: req.image_url,
                link_url: req.link_url,
                display_order: req.display_order,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Home setting updated", setting)))
}

/// DELETE /api/home-settings/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.home_setting_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Home setting deleted",
        MessageResponse {
            message: "Home setting deleted".to_string(),
        },
    )))
}
