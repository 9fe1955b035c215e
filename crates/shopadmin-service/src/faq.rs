//! FAQ management. FAQs may be tenant-scoped or platform-wide.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::faq::FaqRepository;
use shopadmin_entity::faq::{CreateFaq, Faq, UpdateFaq};

use crate::context::RequestContext;

/// Data for creating a FAQ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaqInput {
    /// Target tenant. Admins may leave this unset to create a
    /// platform-wide FAQ; other callers are pinned to their tenant.
    pub tenant_id: Option<Uuid>,
    pub question: String,
    pub answer: String,
    pub display_order: Option<i32>,
}

/// Partial update of a FAQ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFaqInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Handles FAQ management.
#[derive(Clone)]
pub struct FaqService {
    faq_repo: Arc<FaqRepository>,
}

impl FaqService {
    /// Creates a new FAQ service.
    pub fn new(faq_repo: Arc<FaqRepository>) -> Self {
        Self { faq_repo }
    }

    /// Lists FAQs visible to the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Faq>> {
        let scope = ctx.scope_tenant(tenant_id)?;
        self.faq_repo.list(scope, req).await
    }

    /// Fetches a single FAQ. Global FAQs are visible to everyone.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Faq> {
        let faq = self
            .faq_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("FAQ not found"))?;
        if let Some(tenant_id) = faq.tenant_id {
            if ctx.ensure_tenant_access(tenant_id).is_err() {
                return Err(AppError::not_found("FAQ not found"));
            }
        }
        Ok(faq)
    }

    /// Creates a FAQ.
    pub async fn create(&self, ctx: &RequestContext, input: CreateFaqInput) -> AppResult<Faq> {
        ctx.require_manager()?;
        // Admins with no tenant filter produce a platform-wide FAQ.
        let tenant_id = ctx.scope_tenant(input.tenant_id)?;

        if input.question.trim().is_empty() || input.answer.trim().is_empty() {
            return Err(AppError::validation("Question and answer cannot be empty"));
        }

        let faq = self
            .faq_repo
            .create(&CreateFaq {
                tenant_id,
                question: input.question,
                answer: input.answer,
                display_order: input.display_order.unwrap_or(0),
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(faq_id = %faq.id, tenant_id = ?tenant_id, "FAQ created");

        Ok(faq)
    }

    /// Applies a partial update to a FAQ.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateFaqInput,
    ) -> AppResult<Faq> {
        ctx.require_manager()?;
        let existing = self.get(ctx, id).await?;

        // Only admins may edit platform-wide FAQs.
        if existing.tenant_id.is_none() {
            ctx.require_admin()?;
        }

        let faq = self
            .faq_repo
            .update(
                id,
                &UpdateFaq {
                    question: input.question,
                    answer: input.answer,
                    display_order: input.display_order,
                    is_published: input.is_published,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(faq_id = %id, updated_by = %ctx.user_id, "FAQ updated");

        Ok(faq)
    }

    /// Deletes a FAQ.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_manager()?;
        let existing = self.get(ctx, id).await?;
        if existing.tenant_id.is_none() {
            ctx.require_admin()?;
        }

        if !self.faq_repo.delete(id).await? {
            return Err(AppError::not_found("FAQ not found"));
        }

        info!(faq_id = %id, deleted_by = %ctx.user_id, "FAQ deleted");
        Ok(())
    }
}
