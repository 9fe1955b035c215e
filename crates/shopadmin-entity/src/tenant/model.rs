//! Tenant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TenantStatus;

/// An isolated customer/organization scope within the multi-tenant system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Unique URL-safe tenant name (slug).
    pub name: String,
    /// Human-readable storefront name.
    pub display_name: String,
    /// Primary contact email.
    pub contact_email: Option<String>,
    /// Tenant status.
    pub status: TenantStatus,
    /// Logo image URL.
    pub logo_url: Option<String>,
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

impl Tenant {
    /// Whether this tenant's resources are currently served.
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }
}

/// Data required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Unique slug.
    pub name: String,
    /// Storefront name.
    pub display_name: String,
    /// Contact email (optional).
    pub contact_email: Option<String>,
    /// Logo URL (optional).
    pub logo_url: Option<String>,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of an existing tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTenant {
    /// New storefront name.
    pub display_name: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New status.
    pub status: Option<TenantStatus>,
    /// New logo URL.
    pub logo_url: Option<String>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
