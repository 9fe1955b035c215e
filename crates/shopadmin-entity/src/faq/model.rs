//! FAQ entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A frequently-asked question.
///
/// FAQs without a `tenant_id` are platform-wide and shown to every
/// storefront.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    /// Unique FAQ identifier.
    pub id: Uuid,
    /// Owning tenant (none = global).
    pub tenant_id: Option<Uuid>,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
    /// Position in FAQ listings.
    pub display_order: i32,
    /// Whether the FAQ is published.
    pub is_published: bool,
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

/// Data required to create a FAQ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaq {
    /// Owning tenant (none = global).
    pub tenant_id: Option<Uuid>,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
    /// Display order, defaults to 0.
    pub display_order: i32,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a FAQ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFaq {
    /// New question.
    pub question: Option<String>,
    /// New answer.
    pub answer: Option<String>,
    /// New display order.
    pub display_order: Option<i32>,
    /// New published flag.
    pub is_published: Option<bool>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
