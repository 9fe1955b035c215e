//! FAQ entities.

pub mod model;

pub use model::{CreateFaq, Faq, UpdateFaq};
