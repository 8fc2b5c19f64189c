//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use stickerfly_core::{ProductCategory, ProductId, StickerSize};

/// A sticker product: a catalog item, or a one-off created from a
/// customer-uploaded image during the custom-order flow (`is_custom`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Per-unit price before volume discounts.
    pub price: Decimal,
    pub category: ProductCategory,
    /// Always non-empty; creates without sizes get the standard list.
    pub sizes: Vec<StickerSize>,
    pub in_stock: bool,
    pub featured: bool,
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Additional image URLs.
    pub gallery: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Look up one of this product's sizes by its display name.
    #[must_use]
    pub fn size_named(&self, name: &str) -> Option<&StickerSize> {
        self.sizes.iter().find(|s| s.name == name)
    }
}
