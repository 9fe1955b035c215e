//! Response DTOs and the uniform envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopadmin_core::error::FieldError;
use shopadmin_core::types::PageResponse;

/// Pagination metadata echoed alongside list payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total matching items.
    pub total_items: u64,
    /// `ceil(total_items / page_size)`.
    pub total_pages: u64,
}

/// Standard response envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field-level validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    /// Pagination metadata for list payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            meta: None,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: if errors.is_empty() { None } else { Some(errors) },
            meta: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Creates a successful paginated response from a `PageResponse`.
    pub fn page(message: impl Into<String>, page: PageResponse<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            meta: Some(PageMeta {
                page: page.page,
                page_size: page.page_size,
                total_items: page.total_items,
                total_pages: page.total_pages,
            }),
            data: Some(page.items),
            errors: None,
        }
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: shopadmin_entity::user::User,
}

/// Token refresh response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token.
    pub access_token: String,
    /// Its expiration.
    pub expires_at: DateTime<Utc>,
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_empty_sections() {
        let body = serde_json::to_value(ApiResponse::ok("done", 7)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 7);
        assert!(body.get("errors").is_none());
        assert!(body.get("meta").is_none());
    }

    #[test]
    fn paginated_envelope_carries_meta() {
        let page = PageResponse::new(vec!["a", "b"], 2, 10, 42);
        let body = serde_json::to_value(ApiResponse::page("listed", page)).unwrap();
        assert_eq!(body["meta"]["page"], 2);
        assert_eq!(body["meta"]["total_items"], 42);
        assert_eq!(body["meta"]["total_pages"], 5);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn error_envelope() {
        let body = serde_json::to_value(ApiResponse::<serde_json::Value>::error(
            "nope",
            vec![FieldError::new("sku", "required")],
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["field"], "sku");
        assert!(body.get("data").is_none());
    }
}
