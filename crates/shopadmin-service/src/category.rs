//! Category management, scoped to the caller's tenant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::category::CategoryRepository;
use shopadmin_entity::category::{Category, CreateCategory, UpdateCategory};

use crate::context::RequestContext;

/// Data for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    /// Target tenant; non-admins may only use their own.
    pub tenant_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Partial update of a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Handles catalog category management.
#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Lists categories visible to the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Category>> {
        let scope = ctx.scope_tenant(tenant_id)?;
        self.category_repo.list(scope, req).await
    }

    /// Fetches a single category, hiding other tenants' records.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Category> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;
        if ctx.ensure_tenant_access(category.tenant_id).is_err() {
            return Err(AppError::not_found("Category not found"));
        }
        Ok(category)
    }

    /// Creates a category in the caller's (or requested) tenant.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateCategoryInput,
    ) -> AppResult<Category> {
        ctx.require_manager()?;
        let tenant_id = ctx
            .scope_tenant(input.tenant_id)?
            .ok_or_else(|| AppError::validation("tenant_id is required"))?;

        let category = self
            .category_repo
            .create(&CreateCategory {
                tenant_id,
                name: input.name,
                description: input.description,
                image_url: input.image_url,
                display_order: input.display_order.unwrap_or(0),
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(category_id = %category.id, tenant_id = %tenant_id, "Category created");

        Ok(category)
    }

    /// Applies a partial update to a category.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateCategoryInput,
    ) -> AppResult<Category> {
        ctx.require_manager()?;
        // Resolves tenant ownership before writing.
        self.get(ctx, id).await?;

        let category = self
            .category_repo
            .update(
                id,
                &UpdateCategory {
                    name: input.name,
                    description: input.description,
                    image_url: input.image_url,
                    display_order: input.display_order,
                    is_active: input.is_active,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(category_id = %id, updated_by = %ctx.user_id, "Category updated");

        Ok(category)
    }

    /// Deletes a category.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_manager()?;
        self.get(ctx, id).await?;

        if !self.category_repo.delete(id).await? {
            return Err(AppError::not_found("Category not found"));
        }

        info!(category_id = %id, deleted_by = %ctx.user_id, "Category deleted");
        Ok(())
    }
}
