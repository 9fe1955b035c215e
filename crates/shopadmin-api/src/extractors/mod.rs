//! Custom Axum extractors.

pub mod auth;
pub mod list_params;

pub use auth::AuthUser;
pub use list_params::ListParams;
