//! # shopadmin-database
//!
//! PostgreSQL connection management, migrations, the generic list query
//! builder, and one repository per managed resource.

pub mod connection;
pub mod list_query;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use list_query::ListQuery;
