//! Subscription plan management (admin only).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::plan::PlanRepository;
use shopadmin_entity::plan::{BillingCycle, CreatePlan, SubscriptionPlan, UpdatePlan};

use crate::context::RequestContext;

/// Data for creating a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanInput {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub billing_cycle: BillingCycle,
    pub max_products: i32,
    pub max_users: i32,
}

/// Partial update of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub billing_cycle: Option<BillingCycle>,
    pub max_products: Option<i32>,
    pub max_users: Option<i32>,
    pub is_active: Option<bool>,
}

/// Handles subscription plan administration.
#[derive(Clone)]
pub struct PlanService {
    plan_repo: Arc<PlanRepository>,
}

impl PlanService {
    /// Creates a new plan service.
    pub fn new(plan_repo: Arc<PlanRepository>) -> Self {
        Self { plan_repo }
    }

    /// Lists plans. Any authenticated user may browse them.
    pub async fn list(
        &self,
        _ctx: &RequestContext,
        req: &ListRequest,
    ) -> AppResult<PageResponse<SubscriptionPlan>> {
        self.plan_repo.list(req).await
    }

    /// Fetches a single plan by ID.
    pub async fn get(&self, _ctx: &RequestContext, id: Uuid) -> AppResult<SubscriptionPlan> {
        self.plan_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Plan not found"))
    }

    /// Creates a plan with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreatePlanInput,
    ) -> AppResult<SubscriptionPlan> {
        ctx.require_admin()?;

        validate_limits(input.price_cents, input.max_products, input.max_users)?;

        if self.plan_repo.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::conflict("Plan name is already taken"));
        }

        let plan = self
            .plan_repo
            .create(&CreatePlan {
                name: input.name,
                description: input.description,
                price_cents: input.price_cents,
                billing_cycle: input.billing_cycle,
                max_products: input.max_products,
                max_users: input.max_users,
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(plan_id = %plan.id, name = %plan.name, created_by = %ctx.user_id, "Plan created");

        Ok(plan)
    }

    /// Applies a partial update to a plan.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdatePlanInput,
    ) -> AppResult<SubscriptionPlan> {
        ctx.require_admin()?;

        validate_limits(
            input.price_cents.unwrap_or(0),
            input.max_products.unwrap_or(1),
            input.max_users.unwrap_or(1),
        )?;

        if let Some(name) = &input.name {
            if let Some(existing) = self.plan_repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::conflict("Plan name is already taken"));
                }
            }
        }

        let plan = self
            .plan_repo
            .update(
                id,
                &UpdatePlan {
                    name: input.name,
                    description: input.description,
                    price_cents: input.price_cents,
                    billing_cycle: input.billing_cycle,
                    max_products: input.max_products,
                    max_users: input.max_users,
                    is_active: input.is_active,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(plan_id = %id, updated_by = %ctx.user_id, "Plan updated");

        Ok(plan)
    }

    /// Deletes a plan. Plans referenced by subscriptions are protected
    /// by a foreign key and cannot be removed.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        if !self.plan_repo.delete(id).await? {
            return Err(AppError::not_found("Plan not found"));
        }

        info!(plan_id = %id, deleted_by = %ctx.user_id, "Plan deleted");
        Ok(())
    }
}

fn validate_limits(price_cents: i64, max_products: i32, max_users: i32) -> AppResult<()> {
    if price_cents < 0 {
        return Err(AppError::validation("Price cannot be negative"));
    }
    if max_products < 1 || max_users < 1 {
        return Err(AppError::validation(
            "Plan limits must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_validation() {
        assert!(validate_limits(0, 1, 1).is_ok());
        assert!(validate_limits(-1, 10, 10).is_err());
        assert!(validate_limits(100, 0, 10).is_err());
        assert!(validate_limits(100, 10, 0).is_err());
    }
}
