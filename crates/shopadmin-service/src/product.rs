//! Product management, scoped to the caller's tenant and bounded by
//! the tenant's subscribed plan limits.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::category::CategoryRepository;
use shopadmin_database::repositories::plan::PlanRepository;
use shopadmin_database::repositories::product::ProductRepository;
use shopadmin_database::repositories::subscription::SubscriptionRepository;
use shopadmin_entity::product::{CreateProduct, Product, UpdateProduct};

use crate::context::RequestContext;

/// Data for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    /// Target tenant; non-admins may only use their own.
    pub tenant_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price_cents: i64,
    pub currency: Option<String>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
}

/// Partial update of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductInput {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Handles catalog product management.
#[derive(Clone)]
pub struct ProductService {
    product_repo: Arc<ProductRepository>,
    category_repo: Arc<CategoryRepository>,
    subscription_repo: Arc<SubscriptionRepository>,
    plan_repo: Arc<PlanRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(
        product_repo: Arc<ProductRepository>,
        category_repo: Arc<CategoryRepository>,
        subscription_repo: Arc<SubscriptionRepository>,
        plan_repo: Arc<PlanRepository>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
            subscription_repo,
            plan_repo,
        }
    }

    /// Lists products visible to the caller.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Product>> {
        let scope = ctx.scope_tenant(tenant_id)?;
        self.product_repo.list(scope, req).await
    }

    /// Fetches a single product, hiding other tenants' records.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Product> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;
        if ctx.ensure_tenant_access(product.tenant_id).is_err() {
            return Err(AppError::not_found("Product not found"));
        }
        Ok(product)
    }

    /// Creates a product, enforcing SKU uniqueness, category ownership,
    /// and the subscribed plan's product limit.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateProductInput,
    ) -> AppResult<Product> {
        ctx.require_manager()?;
        let tenant_id = ctx
            .scope_tenant(input.tenant_id)?
            .ok_or_else(|| AppError::validation("tenant_id is required"))?;

        if input.price_cents < 0 {
            return Err(AppError::validation("Price cannot be negative"));
        }

        if let Some(category_id) = input.category_id {
            self.check_category(tenant_id, category_id).await?;
        }

        self.check_product_limit(tenant_id).await?;

        if self
            .product_repo
            .find_by_sku(tenant_id, &input.sku)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("SKU is already in use for this tenant"));
        }

        let product = self
            .product_repo
            .create(&CreateProduct {
                tenant_id,
                category_id: input.category_id,
                name: input.name,
                description: input.description,
                sku: input.sku,
                price_cents: input.price_cents,
                currency: input.currency.unwrap_or_else(|| "USD".to_string()),
                stock_quantity: input.stock_quantity.unwrap_or(0),
                image_url: input.image_url,
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(product_id = %product.id, tenant_id = %tenant_id, sku = %product.sku, "Product created");

        Ok(product)
    }

    /// Applies a partial update to a product.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        ctx.require_manager()?;
        let existing = self.get(ctx, id).await?;

        if input.price_cents.is_some_and(|p| p < 0) {
            return Err(AppError::validation("Price cannot be negative"));
        }
        if let Some(category_id) = input.category_id {
            self.check_category(existing.tenant_id, category_id).await?;
        }

        let product = self
            .product_repo
            .update(
                id,
                &UpdateProduct {
                    category_id: input.category_id,
                    name: input.name,
                    description: input.description,
                    price_cents: input.price_cents,
                    currency: input.currency,
                    stock_quantity: input.stock_quantity,
                    image_url: input.image_url,
                    is_active: input.is_active,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(product_id = %id, updated_by = %ctx.user_id, "Product updated");

        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_manager()?;
        self.get(ctx, id).await?;

        if !self.product_repo.delete(id).await? {
            return Err(AppError::not_found("Product not found"));
        }

        info!(product_id = %id, deleted_by = %ctx.user_id, "Product deleted");
        Ok(())
    }

    /// A product's category must belong to the same tenant.
    async fn check_category(&self, tenant_id: Uuid, category_id: Uuid) -> AppResult<()> {
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::validation("Category does not exist"))?;
        if category.tenant_id != tenant_id {
            return Err(AppError::validation(
                "Category belongs to a different tenant",
            ));
        }
        Ok(())
    }

    /// Rejects product creation beyond the tenant's subscribed product
    /// limit. Tenants without an active subscription are not limited.
    async fn check_product_limit(&self, tenant_id: Uuid) -> AppResult<()> {
        let Some(subscription) = self
            .subscription_repo
            .find_active_for_tenant(tenant_id)
            .await?
        else {
            return Ok(());
        };
        let Some(plan) = self.plan_repo.find_by_id(subscription.plan_id).await? else {
            return Ok(());
        };

        let current = self.product_repo.count_by_tenant(tenant_id).await?;
        if current >= plan.max_products as u64 {
            return Err(AppError::conflict(format!(
                "Tenant has reached the plan limit of {} products",
                plan.max_products
            )));
        }
        Ok(())
    }
}
