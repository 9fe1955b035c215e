//! # shopadmin-core
//!
//! Core crate for the ShopAdmin platform. Contains configuration schemas,
//! pagination/sorting types (the list query contract), and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other ShopAdmin crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
