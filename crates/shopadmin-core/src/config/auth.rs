//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT and password policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign JWTs.
    pub jwt_secret: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u32,
    /// Refresh token lifetime in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u32,
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
}

fn default_access_ttl() -> u32 {
    15
}

fn default_refresh_ttl() -> u32 {
    24 * 7
}

fn default_password_min_length() -> u32 {
    10
}
