//! Home-page setting repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::home_setting::{CreateHomeSetting, HomeSetting, UpdateHomeSetting};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["section", "display_order", "created_at", "updated_at"],
    "display_order",
);

const LIST: ListQuery = ListQuery::new("home_settings", &["section", "title", "subtitle"], SORTABLE);

/// Repository for home-page setting CRUD and query operations.
#[derive(Debug, Clone)]
pub struct HomeSettingRepository {
    pool: PgPool,
}

impl HomeSettingRepository {
    /// Create a new home setting repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a setting by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<HomeSetting>> {
        sqlx::query_as::<_, HomeSetting>("SELECT * FROM home_settings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find home setting by id", e)
            })
    }

    /// Find a tenant's setting for one section.
    pub async fn find_by_section(
        &self,
        tenant_id: Uuid,
        section: &str,
    ) -> AppResult<Option<HomeSetting>> {
        sqlx::query_as::<_, HomeSetting>(
            "SELECT * FROM home_settings WHERE tenant_id = $1 AND section = $2",
        )
        .bind(tenant_id)
        .bind(section)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find home setting", e)
        })
    }

    /// List settings with the shared pagination/search/sort contract,
    /// optionally restricted to one tenant.
    pub async fn list(
        &self,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<HomeSetting>> {
        let q = LIST.build(req, true);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count home settings", e)
            })?;

        let settings = sqlx::query_as::<_, HomeSetting>(&q.select_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list home settings", e)
            })?;

        Ok(PageResponse::new(
            settings,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new setting.
    pub async fn create(&self, data: &CreateHomeSetting) -> AppResult<HomeSetting> {
        sqlx::query_as::<_, HomeSetting>(
            "INSERT INTO home_settings (tenant_id, section, title, subtitle, image_url, link_url, \
                                        display_order, created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(&data.section)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.image_url)
        .bind(&data.link_url)
        .bind(data.display_order)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("home_settings_tenant_id_section_key") =>
            {
                AppError::conflict(format!(
                    "Section '{}' already configured for this tenant",
                    data.section
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create home setting", e),
        })
    }

    /// Partially update a setting. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateHomeSetting) -> AppResult<HomeSetting> {
        sqlx::query_as::<_, HomeSetting>(
            "UPDATE home_settings SET title = COALESCE($2, title), \
                                      subtitle = COALESCE($3, subtitle), \
                                      image_url = COALESCE($4, image_url), \
                                      link_url = COALESCE($5, link_url), \
                                      display_order = COALESCE($6, display_order), \
                                      is_active = COALESCE($7, is_active), \
                                      updated_by = COALESCE($8, updated_by), \
                                      user_ip = COALESCE($9, user_ip), \
                                      updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.image_url)
        .bind(&data.link_url)
        .bind(data.display_order)
        .bind(data.is_active)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update home setting", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Home setting {id} not found")))
    }

    /// Delete a setting by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM home_settings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete home setting", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
