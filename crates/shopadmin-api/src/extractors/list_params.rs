//! List query parameter extractor for the shared pagination contract.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::types::{
    DEFAULT_PAGE_SIZE, ListRequest, PageRequest, SortDirection,
};

use crate::error::ApiError;

/// Query parameters for paginated list endpoints.
///
/// `?page=2&page_size=25&search=mug&sort_by=name&sort_order=asc&tenant_id=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default 10, max 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Free-text search term.
    pub search: Option<String>,
    /// Requested sort column, validated per resource.
    pub sort_by: Option<String>,
    /// "asc" or "desc" (default desc).
    pub sort_order: Option<String>,
    /// Tenant filter. Admins may pick any tenant; others are pinned to
    /// their own by the service layer.
    pub tenant_id: Option<Uuid>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl ListParams {
    /// Converts to the domain `ListRequest`. Unknown sort orders fall
    /// back to descending.
    pub fn to_list_request(&self) -> ListRequest {
        let sort_order = match self.sort_order.as_deref() {
            Some("asc") | Some("ASC") => SortDirection::Asc,
            _ => SortDirection::Desc,
        };
        ListRequest {
            page: PageRequest::new(self.page, self.page_size),
            search: self.search.clone(),
            sort_by: self.sort_by.clone(),
            sort_order,
        }
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    /// Extracts from the query string; a malformed parameter yields the
    /// uniform error envelope instead of axum's plain-text rejection.
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::validation(format!("Invalid list parameters: {}", e.body_text()))
            })?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_query() {
        let params: ListParams = serde_urlencoded::from_str("").unwrap();
        let req = params.to_list_request();
        assert_eq!(req.page.page, 1);
        assert_eq!(req.page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(req.sort_order, SortDirection::Desc);
        assert!(req.search.is_none());
    }

    #[test]
    fn parses_full_query() {
        let params: ListParams =
            serde_urlencoded::from_str("page=3&page_size=25&search=mug&sort_by=name&sort_order=asc")
                .unwrap();
        let req = params.to_list_request();
        assert_eq!(req.page.page, 3);
        assert_eq!(req.page.page_size, 25);
        assert_eq!(req.search.as_deref(), Some("mug"));
        assert_eq!(req.sort_by.as_deref(), Some("name"));
        assert_eq!(req.sort_order, SortDirection::Asc);
    }

    #[test]
    fn unknown_sort_order_falls_back_to_desc() {
        let params: ListParams = serde_urlencoded::from_str("sort_order=sideways").unwrap();
        assert_eq!(params.to_list_request().sort_order, SortDirection::Desc);
    }
}
