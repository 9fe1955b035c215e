//! Tenant repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::tenant::{CreateTenant, Tenant, UpdateTenant};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["name", "display_name", "status", "created_at", "updated_at"],
    "created_at",
);

const LIST: ListQuery = ListQuery::new(
    "tenants",
    &["name", "display_name", "contact_email"],
    SORTABLE,
);

/// Repository for tenant CRUD and query operations.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tenant by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tenant by id", e)
            })
    }

    /// Find a tenant by its unique slug (case-insensitive).
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tenant by name", e)
            })
    }

    /// List tenants with the shared pagination/search/sort contract.
    pub async fn list(&self, req: &ListRequest) -> AppResult<PageResponse<Tenant>> {
        let q = LIST.build(req, false);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count tenants", e)
            })?;

        let tenants = sqlx::query_as::<_, Tenant>(&q.select_sql)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tenants", e))?;

        Ok(PageResponse::new(
            tenants,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new tenant.
    pub async fn create(&self, data: &CreateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (name, display_name, contact_email, logo_url, created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.display_name)
        .bind(&data.contact_email)
        .bind(&data.logo_url)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("tenants_name_key") => {
                AppError::conflict(format!("Tenant '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create tenant", e),
        })
    }

    /// Partially update a tenant. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET display_name = COALESCE($2, display_name), \
                                contact_email = COALESCE($3, contact_email), \
                                status = COALESCE($4, status), \
                                logo_url = COALESCE($5, logo_url), \
                                updated_by = COALESCE($6, updated_by), \
                                user_ip = COALESCE($7, user_ip), \
                                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.display_name)
        .bind(&data.contact_email)
        .bind(data.status)
        .bind(&data.logo_url)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update tenant", e))?
        .ok_or_else(|| AppError::not_found(format!("Tenant {id} not found")))
    }

    /// Delete a tenant by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete tenant", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
