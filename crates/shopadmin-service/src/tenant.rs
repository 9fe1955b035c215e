//! Tenant management (admin only).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::tenant::TenantRepository;
use shopadmin_entity::tenant::{CreateTenant, Tenant, TenantStatus, UpdateTenant};

use crate::context::RequestContext;

/// Data for creating a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenantInput {
    pub name: String,
    pub display_name: String,
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
}

/// Partial update of a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTenantInput {
    pub display_name: Option<String>,
    pub contact_email: Option<String>,
    pub status: Option<TenantStatus>,
    pub logo_url: Option<String>,
}

/// Handles tenant administration.
#[derive(Clone)]
pub struct TenantService {
    tenant_repo: Arc<TenantRepository>,
}

impl TenantService {
    /// Creates a new tenant service.
    pub fn new(tenant_repo: Arc<TenantRepository>) -> Self {
        Self { tenant_repo }
    }

    /// Lists tenants with the shared list contract.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Tenant>> {
        ctx.require_admin()?;
        self.tenant_repo.list(req).await
    }

    /// Fetches a single tenant by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Tenant> {
        if !ctx.is_admin() {
            // Non-admins may only look up their own tenant.
            ctx.ensure_tenant_access(id)?;
        }
        self.tenant_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found"))
    }

    /// Creates a new tenant with a unique slug.
    pub async fn create(&self, ctx: &RequestContext, input: CreateTenantInput) -> AppResult<Tenant> {
        ctx.require_admin()?;

        validate_slug(&input.name)?;

        if self.tenant_repo.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::conflict("Tenant name is already taken"));
        }

        let tenant = self
            .tenant_repo
            .create(&CreateTenant {
                name: input.name,
                display_name: input.display_name,
                contact_email: input.contact_email,
                logo_url: input.logo_url,
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(tenant_id = %tenant.id, name = %tenant.name, created_by = %ctx.user_id, "Tenant created");

        Ok(tenant)
    }

    /// Applies a partial update to a tenant.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateTenantInput,
    ) -> AppResult<Tenant> {
        ctx.require_admin()?;

        let tenant = self
            .tenant_repo
            .update(
                id,
                &UpdateTenant {
                    display_name: input.display_name,
                    contact_email: input.contact_email,
                    status: input.status,
                    logo_url: input.logo_url,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(tenant_id = %id, updated_by = %ctx.user_id, "Tenant updated");

        Ok(tenant)
    }

    /// Deletes a tenant and, through cascades, its scoped records.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        if !self.tenant_repo.delete(id).await? {
            return Err(AppError::not_found("Tenant not found"));
        }

        info!(tenant_id = %id, deleted_by = %ctx.user_id, "Tenant deleted");
        Ok(())
    }
}

/// Tenant names become URL path segments and storage prefixes, so they
/// are restricted to lowercase slugs.
fn validate_slug(name: &str) -> AppResult<()> {
    let valid = !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !name.starts_with('-')
        && !name.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(
            "Tenant name must be a lowercase slug (letters, digits, hyphens)",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_validation() {
        assert!(validate_slug("acme-store").is_ok());
        assert!(validate_slug("shop42").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Acme").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
    }
}
