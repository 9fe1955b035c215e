//! # shopadmin-entity
//!
//! Domain entities for the ShopAdmin platform: one module per managed
//! resource, each with its row model and create/update payload structs.

pub mod category;
pub mod faq;
pub mod home_setting;
pub mod plan;
pub mod product;
pub mod subscription;
pub mod tenant;
pub mod user;
