//! Tenant subscription entities.

pub mod model;
pub mod status;

pub use model::{CreateSubscription, TenantSubscription, UpdateSubscription};
pub use status::SubscriptionStatus;
