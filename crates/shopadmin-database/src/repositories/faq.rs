//! FAQ repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shopadmin_core::error::{AppError, ErrorKind};
use shopadmin_core::result::AppResult;
use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::pagination::PageResponse;
use shopadmin_core::types::sorting::SortableFields;
use shopadmin_entity::faq::{CreateFaq, Faq, UpdateFaq};

use crate::list_query::ListQuery;

const SORTABLE: SortableFields = SortableFields::new(
    &["question", "display_order", "created_at", "updated_at"],
    "display_order",
);

const LIST: ListQuery = ListQuery::new("faqs", &["question", "answer"], SORTABLE);

/// Repository for FAQ CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FaqRepository {
    pool: PgPool,
}

impl FaqRepository {
    /// Create a new FAQ repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a FAQ by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faq>> {
        sqlx::query_as::<_, Faq>("SELECT * FROM faqs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find faq by id", e))
    }

    /// List FAQs with the shared pagination/search/sort contract.
    /// A tenant scope also matches platform-wide FAQs (NULL tenant).
    pub async fn list(
        &self,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<Faq>> {
        let q = LIST.build_including_global(req);

        let total: i64 = sqlx::query_scalar(&q.count_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count faqs", e))?;

        let faqs = sqlx::query_as::<_, Faq>(&q.select_sql)
            .bind(tenant_id)
            .bind(&q.pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list faqs", e))?;

        Ok(PageResponse::new(
            faqs,
            req.page.page,
            req.page.page_size,
            total as u64,
        ))
    }

    /// Create a new FAQ.
    pub async fn create(&self, data: &CreateFaq) -> AppResult<Faq> {
        sqlx::query_as::<_, Faq>(
            "INSERT INTO faqs (tenant_id, question, answer, display_order, created_by, user_ip) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.tenant_id)
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.display_order)
        .bind(data.created_by)
        .bind(&data.user_ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create faq", e))
    }

    /// Partially update a FAQ. `None` fields keep their current value.
    pub async fn update(&self, id: Uuid, data: &UpdateFaq) -> AppResult<Faq> {
        sqlx::query_as::<_, Faq>(
            "UPDATE faqs SET question = COALESCE($2, question), \
                             answer = COALESCE($3, answer), \
                             display_order = COALESCE($4, display_order), \
                             is_published = COALESCE($5, is_published), \
                             updated_by = COALESCE($6, updated_by), \
                             user_ip = COALESCE($7, user_ip), \
                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.display_order)
        .bind(data.is_published)
        .bind(data.updated_by)
        .bind(&data.user_ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update faq", e))?
        .ok_or_else(|| AppError::not_found(format!("FAQ {id} not found")))
    }

    /// Delete a FAQ by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete faq", e))?;

        Ok(result.rows_affected() > 0)
    }
}
