//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product category within a tenant's catalog.
///
/// Category names are unique per tenant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Category name.
    pub name: String,
    /// Description shown in the storefront.
    pub description: Option<String>,
    /// Category image URL.
    pub image_url: Option<String>,
    /// Position in storefront listings.
    pub display_order: i32,
    /// Whether the category is visible.
    pub is_active: bool,
    /// The user who created this record.
    pub created_by: Option<Uuid>,
    /// The user who last updated this record.
    pub updated_by: Option<Uuid>,
    /// IP address of the request that last wrote this record.
    pub user_ip: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Category name (unique per tenant).
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Image URL (optional).
    pub image_url: Option<String>,
    /// Display order, defaults to 0.
    pub display_order: i32,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New display order.
    pub display_order: Option<i32>,
    /// New visibility flag.
    pub is_active: Option<bool>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
