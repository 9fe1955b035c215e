//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Which storage backend images are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderKind {
    /// Local filesystem under `data_root`.
    Local,
    /// S3-compatible object storage.
    S3,
}

/// Image storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Active provider.
    #[serde(default = "default_provider")]
    pub provider: StorageProviderKind,
    /// Root directory for the local provider.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Public base URL prepended to stored object keys.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum accepted image size in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
    /// S3 settings (required when `provider = "s3"`).
    #[serde(default)]
    pub s3: S3Config,
}

/// S3 provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Region.
    #[serde(default)]
    pub region: String,
    /// Optional custom endpoint (MinIO and friends).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Key prefix inside the bucket.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_provider() -> StorageProviderKind {
    StorageProviderKind::Local
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_public_base_url() -> String {
    "/static".to_string()
}

fn default_max_image_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_key_prefix() -> String {
    "uploads".to_string()
}

#[cfg(test)]
mod tests {
    // Storage backends name this from the crate root.
    use crate::config::S3Config;

    #[test]
    fn s3_config_defaults_from_empty_section() {
        let s3: S3Config = serde_json::from_str("{}").unwrap();
        assert!(s3.bucket.is_empty());
        assert!(s3.endpoint.is_none());
        assert_eq!(s3.key_prefix, "uploads");
    }
}
