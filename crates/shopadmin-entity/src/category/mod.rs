//! Product category entities.

pub mod model;

pub use model::{Category, CreateCategory, UpdateCategory};
