//! Tenant subscription handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use shopadmin_entity::subscription::TenantSubscription;
use shopadmin_service::subscription::{CreateSubscriptionInput, UpdateSubscriptionInput};

use crate::dto::request::{CreateSubscriptionRequest, UpdateSubscriptionRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/subscriptions
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<TenantSubscription>>>, ApiError> {
    let page = state
        .subscription_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Subscriptions listed", page)))
}

/// GET /api/subscriptions/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TenantSubscription>>, ApiError> {
    let subscription = state.subscription_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Subscription found", subscription)))
}

/// POST /api/subscriptions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSubscriptionRequest>,
) -> Result<Json<ApiResponse<TenantSubscription>>, ApiError> {
    let subscription = state
        .subscription_service
        .create(
            &auth,
            CreateSubscriptionInput {
                tenant_id: req.tenant_id,
                plan_id: req.plan_id,
                starts_at: req.starts_at,
                expires_at: req.expires_at,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Subscription created", subscription)))
}

/// PATCH /api/subscriptions/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSubscriptionRequest>,
) -> Result<Json<ApiResponse<TenantSubscription>>, ApiError> {
    let subscription = state
        .subscription_service
        .update(
            &auth,
            id,
            UpdateSubscriptionInput {
                plan_id: req.plan_id,
                status: req.status,
                expires_at: req.expires_at,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Subscription updated", subscription)))
}

/// DELETE /api/subscriptions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.subscription_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Subscription deleted",
        MessageResponse {
            message: "Subscription deleted".to_string(),
        },
    )))
}
