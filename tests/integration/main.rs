//! HTTP integration tests.
//!
//! These tests run the full router against a real PostgreSQL database.
//! Set `TEST_DATABASE_URL` to enable them; without it each test is a no-op
//! so the suite stays green on machines without a database.

mod helpers;

mod auth_test;
mod list_test;
mod rbac_test;
mod upload_test;
