//! User administration handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::user::User;
use shopadmin_service::user::{CreateUserInput, UpdateUserInput};

use crate::dto::request::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let page = state
        .user_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Users listed", page)))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("User found", user)))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let user = state
        .user_service
        .create(
            &auth,
            CreateUserInput {
                username: req.username,
                email: req.email,
                password: req.password,
                display_name: req.display_name,
                role: req.role,
                tenant_id: req.tenant_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("User created", user)))
}

/// PATCH /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let user = state
        .user_service
        .update(
            &auth,
            id,
            UpdateUserInput {
                email: req.email,
                display_name: req.display_name,
                role: req.role,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("User updated", user)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.user_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "User deleted",
        MessageResponse {
            message: "User deleted".to_string(),
        },
    )))
}

/// PUT /api/users/{id}/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    state
        .user_service
        .change_password(&auth, id, req.current_password.as_deref(), &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Password changed",
        MessageResponse {
            message: "Password changed successfully".to_string(),
        },
    )))
}
