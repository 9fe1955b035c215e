//! Tenant subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SubscriptionStatus;

/// A tenant's subscription to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TenantSubscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// Subscribing tenant.
    pub tenant_id: Uuid,
    /// Plan being subscribed to.
    pub plan_id: Uuid,
    /// Subscription status.
    pub status: SubscriptionStatus,
    /// When the subscription starts.
    pub starts_at: DateTime<Utc>,
    /// When the subscription lapses.
    pub expires_at: DateTime<Utc>,
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

impl TenantSubscription {
    /// Whether the subscription is active and not past expiry.
    pub fn is_current(&self) -> bool {
        self.status == SubscriptionStatus::Active && Utc::now() < self.expires_at
    }
}

/// Data required to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// Subscribing tenant.
    pub tenant_id: Uuid,
    /// Plan to subscribe to.
    pub plan_id: Uuid,
    /// Start of the term.
    pub starts_at: DateTime<Utc>,
    /// End of the term.
    pub expires_at: DateTime<Utc>,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubscription {
    /// New plan.
    pub plan_id: Option<Uuid>,
    /// New status.
    pub status: Option<SubscriptionStatus>,
    /// New expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
