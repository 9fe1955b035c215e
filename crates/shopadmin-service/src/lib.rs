//! # shopadmin-service
//!
//! Business logic for the ShopAdmin console. One service per managed
//! resource, each enforcing role checks, tenant scoping, and uniqueness
//! rules on top of the repository layer.

pub mod auth;
pub mod category;
pub mod context;
pub mod faq;
pub mod home_setting;
pub mod plan;
pub mod product;
pub mod subscription;
pub mod tenant;
pub mod upload;
pub mod user;

pub use auth::AuthService;
pub use category::CategoryService;
pub use context::RequestContext;
pub use faq::FaqService;
pub use home_setting::HomeSettingService;
pub use plan::PlanService;
pub use product::ProductService;
pub use subscription::SubscriptionService;
pub use tenant::TenantService;
pub use upload::UploadService;
pub use user::UserService;
