//! Product repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::product::{CreateProduct, Product, UpdateProduct};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["name", "sku", "price_cents", "stock_quantity", "created_at", "updated_at"],
    "created_at",
);

const LIST: ListQuery = ListQuery::new("products", &["name", "sku", "description"], SORTABLE);

/// Repository for product CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a product by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    /// Find a product by SKU within a tenant.
    pub async fn find_by_sku(&self, tenant_id: Uuid, sku: &str) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE tenant_id = $1 AND LOWER(sku) = LOWER($2)",
        )
        .bind(tenant_id)
        .bind(sku)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product by sku", e))
    }

    /// List products with the shared pagination/search/sort contract,
    /// optionally restricted to one tenant.
    pub async fn list(
        &self,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Product>> {
        let q = LIST.build(req, true);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count products", e)
            })?;

        let products = sqlx::query_as::<_, Product>(&q.select_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list products", e)
            })?;

        Ok(PageResponse::new(
            products,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new product.
    pub async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (tenant_id, category_id, name, description, sku, price_cents, \
                                   currency, stock_quantity, image_url, created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.sku)
        .bind(data.price_cents)
        .bind(&data.currency)
        .bind(data.stock_quantity)
        .bind(&data.image_url)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("products_tenant_id_sku_key") =>
            {
                AppError::conflict(format!("SKU '{}' already exists for this tenant", data.sku))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create product", e),
        })
    }

    /// Partially update a product. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET category_id = COALESCE($2, category_id), \
                                 name = COALESCE($3, name), \
                                 description = COALESCE($4, description), \
                                 price_cents = COALESCE($5, price_cents), \
                                 currency = COALESCE($6, currency), \
                                 stock_quantity = COALESCE($7, stock_quantity), \
                                 image_url = COALESCE($8, image_url), \
                                 is_active = COALESCE($9, is_active), \
                                 updated_by = COALESCE($10, updated_by), \
                                 user_ip = COALESCE($11, user_ip), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.category_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(&data.currency)
        .bind(data.stock_quantity)
        .bind(&data.image_url)
        .bind(data.is_active)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Delete a product by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count products belonging to a tenant.
    pub async fn count_by_tenant(&self, tenant_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count products", e)
            })?;
        Ok(count as u64)
    }
}
