//! Subscription plan entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Billing cycle for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "billing_cycle", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// Billed every month.
    Monthly,
    /// Billed every year.
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A subscription plan tenants can sign up to.
///
/// Plan names are globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriptionPlan {
    /// Unique plan identifier.
    pub id: Uuid,
    /// Plan name (unique).
    pub name: String,
    /// Marketing description.
    pub description: Option<String>,
    /// Price in minor currency units per billing cycle.
    pub price_cents: i64,
    /// Billing cycle.
    pub billing_cycle: BillingCycle,
    /// Maximum number of products a subscribed tenant may manage.
    pub max_products: i32,
    /// Maximum number of users a subscribed tenant may have.
    pub max_users: i32,
    /// Whether new subscriptions to this plan are accepted.
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

/// Data required to create a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Plan name (unique).
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Price in minor units.
    pub price_cents: i64,
    /// Billing cycle.
    pub billing_cycle: BillingCycle,
    /// Product limit.
    pub max_products: i32,
    /// User limit.
    pub max_users: i32,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price in minor units.
    pub price_cents: Option<i64>,
    /// New billing cycle.
    pub billing_cycle: Option<BillingCycle>,
    /// New product limit.
    pub max_products: Option<i32>,
    /// New user limit.
    pub max_users: Option<i32>,
    /// New availability flag.
    pub is_active: Option<bool>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
