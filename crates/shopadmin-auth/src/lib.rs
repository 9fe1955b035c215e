//! # shopadmin-auth
//!
//! Authentication primitives for the ShopAdmin console.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation, validation, and claims
//! - `password` — Argon2id password hashing and policy enforcement

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
