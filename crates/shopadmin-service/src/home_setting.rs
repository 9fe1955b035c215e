//! Home-page section management, scoped to the caller's tenant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::home_setting::HomeSettingRepository;
use shopadmin_entity::home_setting::{CreateHomeSetting, HomeSetting, UpdateHomeSetting};

use crate::context::RequestContext;

/// Data for creating a home-page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHomeSettingInput {
    /// Target tenant; non-admins may only use their own.
    pub tenant_id: Option<Uuid>,
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Partial update of a home-page section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHomeSettingInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Handles storefront home-page configuration.
#[derive(Clone)]
pub struct HomeSettingService {
    setting_repo: Arc<HomeSettingRepository>,
}

impl HomeSettingService {
    /// Creates a new home setting service.
    pub fn new(setting_repo: Arc<HomeSettingRepository>) -> Self {
        Self { setting_repo }
    }

    /// Lists sections visible to the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<HomeSetting>> {
        let scope = ctx.scope_tenant(tenant_id)?;
        self.setting_repo.list(scope, req).await
    }

    /// Fetches a single section, hiding other tenants' records.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<HomeSetting> {
        let setting = self
            .setting_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Home setting not found"))?;
        if ctx.ensure_tenant_access(setting.tenant_id).is_err() {
            return Err(AppError::not_found("Home setting not found"));
        }
        Ok(setting)
    }

    /// Creates a section. Section keys are unique per tenant.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateHomeSettingInput,
    ) -> AppResult<HomeSetting> {
        ctx.require_manager()?;
        let tenant_id = ctx
            .scope_tenant(input.tenant_id)?
            .ok_or_else(|| AppError::validation("tenant_id is required"))?;

        if input.section.trim().is_empty() {
            return Err(AppError::validation("Section key cannot be empty"));
        }

        if self
            .setting_repo
            .find_by_section(tenant_id, &input.section)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A setting for this section already exists",
            ));
        }

        let setting = self
            .setting_repo
            .create(&CreateHomeSetting {
                tenant_id,
                section: input.section,
                title: input.title,
                subtitle: input.subtitle,
                image_url: input.image_url,
                link_url: input.link_url,
                display_order: input.display_order.unwrap_or(0),
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(setting_id = %setting.id, tenant_id = %tenant_id, section = %setting.section, "Home setting created");

        Ok(setting)
    }

    /// Applies a partial update to a section.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateHomeSettingInput,
    ) -> AppResult<HomeSetting> {
        ctx.require_manager()?;
        self.get(ctx, id).await?;

        let setting = self
            .setting_repo
            .update(
                id,
                &UpdateHomeSetting {
                    title: input.title,
                    subtitle: input.subtitle,
                    image_url: input.image_url,
                    link_url: input.link_url,
                    display_order: input.display_order,
                    is_active: input.is_active,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(setting_id = %id, updated_by = %ctx.user_id, "Home setting updated");

        Ok(setting)
    }

    /// Deletes a section.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_manager()?;
        self.get(ctx, id).await?;

        if !self.setting_repo.delete(id).await? {
            return Err(AppError::not_found("Home setting not found"));
        }

        info!(setting_id = %id, deleted_by = %ctx.user_id, "Home setting deleted");
        Ok(())
    }
}
