//! FAQ handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shopadmin_core::error::AppError;
use shopadmin_entity::faq::Faq;
use shopadmin_service::faq::{CreateFaqInput, UpdateFaqInput};

use crate::dto::request::{CreateFaqRequest, UpdateFaqRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/faqs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    params: ListParams,
) -> Result<Json<ApiResponse<Vec<Faq>>>, ApiError> {
    let page = state
        .faq_service
        .list(&auth, params.tenant_id, &params.to_list_request())
        .await?;
    Ok(Json(ApiResponse::page("FAQs listed", page)))
}

/// GET /api/faqs/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Faq>>, ApiError> {
    let faq = state.faq_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok("FAQ found", faq)))
}

/// POST /api/faqs
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFaqRequest>,
) -> Result<Json<ApiResponse<Faq>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let faq = state
        .faq_service
        .create(
            &auth,
            CreateFaqInput {
                tenant_id: req.tenant_id,
                question: req.question,
                answer: req.answer,
                display_order: req.display_order,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("FAQ created", faq)))
}

/// PATCH /api/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFaqRequest>,
) -> Result<Json<ApiResponse<Faq>>, ApiError> {
    req.validate().map_err(AppError::from)?;

    let faq = state
        .faq_service
        .update(
            &auth,
            id,
            UpdateFaqInput {
                question: req.question,
                answer: req.answer,
                display_order: req.display_order,
                is_published: req.is_published,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("FAQ updated", faq)))
}

/// DELETE /api/faqs/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.faq_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        "FAQ deleted",
        MessageResponse {
            message: "FAQ deleted".to_string(),
        },
    )))
}
