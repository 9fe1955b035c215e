//! Subscription plan entities.

pub mod model;

pub use model::{BillingCycle, CreatePlan, SubscriptionPlan, UpdatePlan};
