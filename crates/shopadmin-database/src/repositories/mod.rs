//! Repository implementations, one per managed resource.

pub mod category;
pub mod faq;
pub mod home_setting;
pub mod plan;
pub mod product;
pub mod subscription;
pub mod tenant;
pub mod user;

pub use category::CategoryRepository;
pub use faq::FaqRepository;
pub use home_setting::HomeSettingRepository;
pub use plan::PlanRepository;
pub use product::ProductRepository;
pub use subscription::SubscriptionRepository;
pub use tenant::TenantRepository;
pub use user::UserRepository;
