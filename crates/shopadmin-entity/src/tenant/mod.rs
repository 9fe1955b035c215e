//! Tenant domain entities.

pub mod model;
pub mod status;

pub use model::{CreateTenant, Tenant, UpdateTenant};
pub use status::TenantStatus;
