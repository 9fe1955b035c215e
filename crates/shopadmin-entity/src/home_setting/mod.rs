//! Home-page setting entities.

pub mod model;

pub use model::{CreateHomeSetting, HomeSetting, UpdateHomeSetting};
