//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod faqs;
pub mod health;
pub mod home_settings;
pub mod plans;
pub mod products;
pub mod subscriptions;
pub mod tenants;
pub mod uploads;
pub mod users;
