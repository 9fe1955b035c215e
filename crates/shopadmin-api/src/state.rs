//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use shopadmin_auth::jwt::decoder::JwtDecoder;
use shopadmin_core::config::AppConfig;
use shopadmin_service::auth::AuthService;
use shopadmin_service::category::CategoryService;
use shopadmin_service::faq::FaqService;
use shopadmin_service::home_setting::HomeSettingService;
use shopadmin_service::plan::PlanService;
use shopadmin_service::product::ProductService;
use shopadmin_service::subscription::SubscriptionService;
use shopadmin_service::tenant::TenantService;
use shopadmin_service::upload::UploadService;
use shopadmin_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Authentication flows.
    pub auth_service: Arc<AuthService>,
    /// User administration.
    pub user_service: Arc<UserService>,
    /// Tenant administration.
    pub tenant_service: Arc<TenantService>,
    /// Catalog categories.
    pub category_service: Arc<CategoryService>,
    /// Catalog products.
    pub product_service: Arc<ProductService>,
    /// Subscription plans.
    pub plan_service: Arc<PlanService>,
    /// Tenant subscriptions.
    pub subscription_service: Arc<SubscriptionService>,
    /// FAQs.
    pub faq_service: Arc<FaqService>,
    /// Home-page settings.
    pub home_setting_service: Arc<HomeSettingService>,
    /// Image uploads.
    pub upload_service: Arc<UploadService>,
}
