//! Tenant subscription management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::plan::PlanRepository;
use shopadmin_database::repositories::subscription::SubscriptionRepository;
use shopadmin_database::repositories::tenant::TenantRepository;
use shopadmin_entity::subscription::{
    CreateSubscription, SubscriptionStatus, TenantSubscription, UpdateSubscription,
};

use crate::context::RequestContext;

/// Data for creating a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionInput {
    pub tenant_id: Uuid,
    pub plan_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Partial update of a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionInput {
    pub plan_id: Option<Uuid>,
    pub status: Option<SubscriptionStatus>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Handles tenant subscription administration.
#[derive(Clone)]
pub struct SubscriptionService {
    subscription_repo: Arc<SubscriptionRepository>,
    plan_repo: Arc<PlanRepository>,
    tenant_repo: Arc<TenantRepository>,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    pub fn new(
        subscription_repo: Arc<SubscriptionRepository>,
        plan_repo: Arc<PlanRepository>,
        tenant_repo: Arc<TenantRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            plan_repo,
            tenant_repo,
        }
    }

    /// Lists subscriptions visible to the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<TenantSubscription>> {
        let scope = ctx.scope_tenant(tenant_id)?;
        self.subscription_repo.list(scope, req).await
    }

    /// Fetches a single subscription, hiding other tenants' records.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<TenantSubscription> {
        let subscription = self
            .subscription_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Subscription not found"))?;
        if ctx.ensure_tenant_access(subscription.tenant_id).is_err() {
            return Err(AppError::not_found("Subscription not found"));
        }
        Ok(subscription)
    }

    /// Subscribes a tenant to a plan (admin only).
    ///
    /// A tenant can hold at most one active subscription at a time.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateSubscriptionInput,
    ) -> AppResult<TenantSubscription> {
        ctx.require_admin()?;

        if input.starts_at >= input.expires_at {
            return Err(AppError::validation("Subscription must expire after it starts"));
        }

        if self
            .tenant_repo
            .find_by_id(input.tenant_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Tenant does not exist"));
        }

        let plan = self
            .plan_repo
            .find_by_id(input.plan_id)
            .await?
            .ok_or_else(|| AppError::validation("Plan does not exist"))?;
        if !plan.is_active {
            return Err(AppError::validation("Plan is no longer offered"));
        }

        if self
            .subscription_repo
            .find_active_for_tenant(input.tenant_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Tenant already has an active subscription",
            ));
        }

        let subscription = self
            .subscription_repo
            .create(&CreateSubscription {
                tenant_id: input.tenant_id,
                plan_id: input.plan_id,
                starts_at: input.starts_at,
                expires_at: input.expires_at,
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(
            subscription_id = %subscription.id,
            tenant_id = %input.tenant_id,
            plan = %plan.name,
            "Subscription created"
        );

        Ok(subscription)
    }

    /// Applies a partial update (plan change, cancellation, renewal).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateSubscriptionInput,
    ) -> AppResult<TenantSubscription> {
        ctx.require_admin()?;
        self.get(ctx, id).await?;

        if let Some(plan_id) = input.plan_id {
            let plan = self
                .plan_repo
                .find_by_id(plan_id)
                .await?
                .ok_or_else(|| AppError::validation("Plan does not exist"))?;
            if !plan.is_active {
                return Err(AppError::validation("Plan is no longer offered"));
            }
        }

        let subscription = self
            .subscription_repo
            .update(
                id,
                &UpdateSubscription {
                    plan_id: input.plan_id,
                    status: input.status,
                    expires_at: input.expires_at,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(subscription_id = %id, updated_by = %ctx.user_id, "Subscription updated");

        Ok(subscription)
    }

    /// Deletes a subscription record.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.get(ctx, id).await?;

        if !self.subscription_repo.delete(id).await? {
            return Err(AppError::not_found("Subscription not found"));
        }

        info!(subscription_id = %id, deleted_by = %ctx.user_id, "Subscription deleted");
        Ok(())
    }
}
