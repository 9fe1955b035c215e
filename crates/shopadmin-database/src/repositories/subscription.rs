//! Tenant subscription repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::subscription::{CreateSubscription, TenantSubscription, UpdateSubscription};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["status", "starts_at", "expires_at", "created_at", "updated_at"],
    "created_at",
);

const LIST: ListQuery = ListQuery::new("tenant_subscriptions", &["status"], SORTABLE);

/// Repository for tenant subscription CRUD and query operations.
#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a subscription by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TenantSubscription>> {
        sqlx::query_as::<_, TenantSubscription>(
            "SELECT * FROM tenant_subscriptions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find subscription by id", e)
        })
    }

    /// Find a tenant's currently active subscription, if any.
    pub async fn find_active_for_tenant(
        &self,
        tenant_id: Uuid,
    ) -> AppResult<Option<TenantSubscription>> {
        sqlx::query_as::<_, TenantSubscription>(
            "SELECT * FROM tenant_subscriptions \
             WHERE tenant_id = $1 AND status = 'active' AND expires_at > NOW() \
             ORDER BY expires_at DESC LIMIT 1",
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active subscription", e)
        })
    }

    /// List subscriptions with the shared pagination/search/sort contract,
    /// optionally restricted to one tenant.
    pub async fn list(
        &self,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<TenantSubscription>> {
        let q = LIST.build(req, true);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count subscriptions", e)
            })?;

        let subscriptions = sqlx::query_as::<_, TenantSubscription>(&q.select_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list subscriptions", e)
            })?;

        Ok(PageResponse::new(
            subscriptions,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new subscription.
    pub async fn create(&self, data: &CreateSubscription) -> AppResult<TenantSubscription> {
        sqlx::query_as::<_, TenantSubscription>(
            "INSERT INTO tenant_subscriptions (tenant_id, plan_id, starts_at, expires_at, \
                                               created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(data.plan_id)
        .bind(data.starts_at)
        .bind(data.expires_at)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create subscription", e)
        })
    }

    /// Partially update a subscription. `None` fields keep their current value.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateSubscription,
    ) -> AppResult<TenantSubscription> {
        sqlx::query_as::<_, TenantSubscription>(
            "UPDATE tenant_subscriptions SET plan_id = COALESCE($2, plan_id), \
                                             status = COALESCE($3, status), \
                                             expires_at = COALESCE($4, expires_at), \
                                             updated_by = COALESCE($5, updated_by), \
                                             user_ip = COALESCE($6, user_ip), \
                                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.plan_id)
        .bind(data.status)
        .bind(data.expires_at)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update subscription", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Subscription {id} not found")))
    }

    /// Delete a subscription by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tenant_subscriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete subscription", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
