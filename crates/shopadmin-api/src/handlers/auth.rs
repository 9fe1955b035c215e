//! Authentication handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use validator::Validate;

use shopadmin_entity::user::User;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, LoginResponse, RefreshResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate().map_err(shopadmin_core::error::AppError::from)?;

    let ip = forwarded_ip(&headers);
    let (user, tokens) = state
        .auth_service
        .login(&req.username, &req.password, &ip)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
            user,
        },
    )))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>, ApiError> {
    let (access_token, expires_at) = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(
        "Token refreshed",
        RefreshResponse {
            access_token,
            expires_at,
        },
    )))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok("Current user", user)))
}

fn forwarded_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
