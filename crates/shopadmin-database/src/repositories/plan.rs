//! Subscription plan repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::plan::{CreatePlan, SubscriptionPlan, UpdatePlan};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["name", "price_cents", "billing_cycle", "created_at", "updated_at"],
    "created_at",
);

const LIST: ListQuery = ListQuery::new("subscription_plans", &["name", "description"], SORTABLE);

/// Repository for subscription plan CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    /// Create a new plan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a plan by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SubscriptionPlan>> {
        sqlx::query_as::<_, SubscriptionPlan>("SELECT * FROM subscription_plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find plan by id", e)
            })
    }

    /// Find a plan by its unique name (case-insensitive).
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<SubscriptionPlan>> {
        sqlx::query_as::<_, SubscriptionPlan>(
            "SELECT * FROM subscription_plans WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find plan by name", e))
    }

    /// List plans with the shared pagination/search/sort contract.
    pub async fn list(&self, req: &ListRequest) -> AppResult<PageResponse<SubscriptionPlan>> {
        let q = LIST.build(req, false);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count plans", e))?;

        let plans = sqlx::query_as::<_, SubscriptionPlan>(&q.select_sql)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list plans", e))?;

        Ok(PageResponse::new(
            plans,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new plan.
    pub async fn create(&self, data: &CreatePlan) -> AppResult<SubscriptionPlan> {
        sqlx::query_as::<_, SubscriptionPlan>(
            "INSERT INTO subscription_plans (name, description, price_cents, billing_cycle, \
                                             max_products, max_users, created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(data.billing_cycle)
        .bind(data.max_products)
        .bind(data.max_users)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("subscription_plans_name_key") =>
            {
                AppError::conflict(format!("Plan '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create plan", e),
        })
    }

    /// Partially update a plan. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdatePlan) -> AppResult<SubscriptionPlan> {
        sqlx::query_as::<_, SubscriptionPlan>(
            "UPDATE subscription_plans SET name = COALESCE($2, name), \
                                           description = COALESCE($3, description), \
                                           price_cents = COALESCE($4, price_cents), \
                                           billing_cycle = COALESCE($5, billing_cycle), \
                                           max_products = COALESCE($6, max_products), \
                                           max_users = COALESCE($7, max_users), \
                                           is_active = COALESCE($8, is_active), \
                                           updated_by = COALESCE($9, updated_by), \
                                           user_ip = COALESCE($10, user_ip), \
                                           updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(data.billing_cycle)
        .bind(data.max_products)
        .bind(data.max_users)
        .bind(data.is_active)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update plan", e))?
        .ok_or_else(|| AppError::not_found(format!("Plan {id} not found")))
    }

    /// Delete a plan by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM subscription_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete plan", e))?;

        Ok(result.rows_affected() > 0)
    }
}
