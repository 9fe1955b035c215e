//! Category repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::category::{Category, CreateCategory, UpdateCategory};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["name", "display_order", "created_at", "updated_at"],
    "display_order",
);

const LIST: ListQuery = ListQuery::new("categories", &["name", "description"], SORTABLE);

/// Repository for category CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find category by id", e)
            })
    }

    /// List categories with the shared pagination/search/sort contract,
    /// optionally restricted to one tenant.
    pub async fn list(
        &self,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Category>> {
        let q = LIST.build(req, true);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;

        let categories = sqlx::query_as::<_, Category>(&q.select_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list categories", e)
            })?;

        Ok(PageResponse::new(
            categories,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new category.
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (tenant_id, name, description, image_url, display_order, \
                                     created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.display_order)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_tenant_id_name_key") =>
            {
                AppError::conflict(format!(
                    "Category '{}' already exists for this tenant",
                    data.name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }

    /// Partially update a category. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = COALESCE($2, name), \
                                   description = COALESCE($3, description), \
                                   image_url = COALESCE($4, image_url), \
                                   display_order = COALESCE($5, display_order), \
                                   is_active = COALESCE($6, is_active), \
                                   updated_by = COALESCE($7, updated_by), \
                                   user_ip = COALESCE($8, user_ip), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.display_order)
        .bind(data.is_active)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Delete a category by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
