//! Subscription plan handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::plan::SubscriptionPlan;
use shopadmin_service::plan::{CreatePlanInput, UpdatePlanInput};

use crate::dto::request::{CreatePlanRequest, UpdatePlanRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/plans
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<SubscriptionPlan>>>, ApiError> {
    let page = state
        .plan_service
        .list(&auth, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("Plans listed", page)))
}

/// GET /api/plans/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubscriptionPlan>>, ApiError> {
    let plan = state.plan_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("Plan found", plan)))
}

/// POST /api/plans
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Json<ApiResponse<SubscriptionPlan>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let plan = state
        .plan_service
        .create(
            &auth,
            CreatePlanInput {
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                billing_cycle: req.billing_cycle,
                max_products: req.max_products,
                max_users: req.max_users,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Plan created", plan)))
}

/// PATCH /api/plans/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePlanRequest>,
) -> Result<Json<ApiResponse<SubscriptionPlan>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let plan = state
        .plan_service
        .update(
            &auth,
            id,
            UpdatePlanInput {
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                billing_cycle: req.billing_cycle,
                max_products: req.max_products,
                max_users: req.max_users,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Plan updated", plan)))
}

/// DELETE /api/plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.plan_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "Plan deleted",
        MessageResponse {
            message: "Plan deleted".to_string(),
        },
    )))
}
