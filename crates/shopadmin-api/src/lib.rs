//! # shopadmin-api
//!
//! HTTP API layer for ShopAdmin built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs, and error mapping to the uniform response envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
