//! Home-page setting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One configurable section of a tenant's storefront home page
/// (hero, banner, promo strip, and so on).
///
/// `section` is unique per tenant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HomeSetting {
    /// Unique setting identifier.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Section key, e.g. "hero" or "banner".
    pub section: String,
    /// Headline text.
    pub title: Option<String>,
    /// Supporting text.
    pub subtitle: Option<String>,
    /// Section image URL.
    pub image_url: Option<String>,
    /// Click-through URL.
    pub link_url: Option<String>,
    /// Position on the home page.
    pub display_order: i32,
    /// Whether the section is rendered.
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

/// Data required to create a home setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHomeSetting {
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Section key (unique per tenant).
    pub section: String,
    /// Headline (optional).
    pub title: Option<String>,
    /// Supporting text (optional).
    pub subtitle: Option<String>,
    /// Image URL (optional).
    pub image_url: Option<String>,
    /// Click-through URL (optional).
    pub link_url: Option<String>,
    /// Display order, defaults to 0.
    pub display_order: i32,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a home setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHomeSetting {
    /// New headline.
    pub title: Option<String>,
    /// New supporting text.
    pub subtitle: Option<String>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New click-through URL.
    pub link_url: Option<String>,
    /// New display order.
    pub display_order: Option<i32>,
    /// New visibility flag.
    pub is_active: Option<bool>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
