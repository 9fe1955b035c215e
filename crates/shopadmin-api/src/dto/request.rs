//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shopadmin_entity::plan::BillingCycle;
use shopadmin_entity::subscription::SubscriptionStatus;
use shopadmin_entity::tenant::TenantStatus;
use shopadmin_entity::user::{UserRole, UserStatus};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Required when changing your own password, ignored for admin resets.
    pub current_password: Option<String>,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub tenant_id: Option<Uuid>,
}

/// Update user request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

/// Create tenant request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTenantRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
}

/// Update tenant request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTenantRequest {
    #[validate(length(min = 1, max = 255))]
    pub display_name: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub status: Option<TenantStatus>,
    pub logo_url: Option<String>,
}

/// Create category request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    pub tenant_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Update category request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Create product request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    pub tenant_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub sku: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
}

/// Update product request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Create plan request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    pub billing_cycle: BillingCycle,
    #[validate(range(min = 1))]
    pub max_products: i32,
    #[validate(range(min = 1))]
    pub max_users: i32,
}

/// Update plan request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    pub billing_cycle: Option<BillingCycle>,
    #[validate(range(min = 1))]
    pub max_products: Option<i32>,
    #[validate(range(min = 1))]
    pub max_users: Option<i32>,
    pub is_active: Option<bool>,
}

/// Create subscription request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub tenant_id: Uuid,
    pub plan_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Update subscription request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub plan_id: Option<Uuid>,
    pub status: Option<SubscriptionStatus>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Create FAQ request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFaqRequest {
    pub tenant_id: Option<Uuid>,
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    pub display_order: Option<i32>,
}

/// Update FAQ request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateFaqRequest {
    #[validate(length(min = 1))]
    pub question: Option<String>,
    #[validate(length(min = 1))]
    pub answer: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Create home setting request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHomeSettingRequest {
    pub tenant_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Update home setting request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHomeSettingRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
