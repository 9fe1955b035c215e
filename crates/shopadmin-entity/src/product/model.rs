//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A sellable product within a tenant's catalog.
///
/// SKUs are unique per tenant. Prices are stored as integer cents to avoid
/// floating-point rounding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Category this product belongs to.
    pub category_id: Option<Uuid>,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Stock-keeping unit, unique per tenant.
    pub sku: String,
    /// Price in minor currency units.
    pub price_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Whether the product is purchasable.
    pub is_active: bool,
    /// The user who created this record.
    pub created_by: Option<Uuid>,
    /// The user who last updated this record.
    pub updated_by: Option<Uuid>,
    /// IP address of the request that last wrote this record.
    pub user_ip: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Category (optional).
    pub category_id: Option<Uuid>,
    /// Product name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// SKU (unique per tenant).
    pub sku: String,
    /// Price in minor units.
    pub price_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Initial stock.
    pub stock_quantity: i32,
    /// Image URL (optional).
    pub image_url: Option<String>,
    /// Creating user's ID.
    pub created_by: Option<Uuid>,
    /// IP address of the creating request.
    pub user_ip: Option<String>,
}

/// Data for a partial update of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New category.
    pub category_id: Option<Uuid>,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price in minor units.
    pub price_cents: Option<i64>,
    /// New currency code.
    pub currency: Option<String>,
    /// New stock quantity.
    pub stock_quantity: Option<i32>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New purchasable flag.
    pub is_active: Option<bool>,
    /// Updating user's ID.
    pub updated_by: Option<Uuid>,
    /// IP address of the updating request.
    pub user_ip: Option<String>,
}
