//! # shopadmin-storage
//!
//! Image storage for the ShopAdmin console.
//!
//! Uploaded images are validated (size limit, magic-byte signature) and
//! written to a pluggable backend: the local filesystem or S3-compatible
//! object storage (behind the `s3` feature, enabled by default).

pub mod local;
pub mod provider;
#[cfg(feature = "s3")]
pub mod s3;
pub mod sniff;
pub mod store;

pub use local::LocalImageStorage;
pub use provider::ImageStorageProvider;
#[cfg(feature = "s3")]
pub use s3::S3ImageStorage;
pub use sniff::ImageFormat;
pub use store::{ImageStore, StoredImage};
