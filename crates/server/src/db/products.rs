//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use stickerfly_core::{ProductCategory, ProductId, StickerSize};

use super::RepositoryError;
use crate::models::product::Product;

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    sizes: JsonValue,
    in_stock: bool,
    featured: bool,
    is_custom: bool,
    image_url: Option<String>,
    gallery: JsonValue,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category: ProductCategory = row
            .category
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid category: {e}")))?;
        let sizes: Vec<StickerSize> = serde_json::from_value(row.sizes)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid sizes: {e}")))?;
        let gallery: Vec<String> = serde_json::from_value(row.gallery)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid gallery: {e}")))?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category,
            sizes,
            in_stock: row.in_stock,
            featured: row.featured,
            is_custom: row.is_custom,
            image_url: row.image_url,
            gallery,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Field values for creating or overwriting a product.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub sizes: Vec<StickerSize>,
    pub in_stock: bool,
    pub featured: bool,
    pub is_custom: bool,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
}

impl ProductRecord {
    fn sizes_json(&self) -> Result<JsonValue, RepositoryError> {
        serde_json::to_value(&self.sizes)
            .map_err(|e| RepositoryError::DataCorruption(format!("unencodable sizes: {e}")))
    }

    fn gallery_json(&self) -> Result<JsonValue, RepositoryError> {
        serde_json::to_value(&self.gallery)
            .map_err(|e| RepositoryError::DataCorruption(format!("unencodable gallery: {e}")))
    }
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, sizes, in_stock, featured, \
                               is_custom, image_url, gallery, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally filtered by category and/or featured flag.
    ///
    /// Custom one-off products never appear in catalog listings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category: Option<ProductCategory>,
        featured_only: bool,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE NOT is_custom
               AND ($1::text IS NULL OR category = $1)
               AND (NOT $2 OR featured)
             ORDER BY created_at DESC"
        ))
        .bind(category.map(|c| c.as_str()))
        .bind(featured_only)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, record: &ProductRecord) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products
                 (name, description, price, category, sizes, in_stock, featured, is_custom,
                  image_url, gallery)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(record.category.as_str())
        .bind(record.sizes_json()?)
        .bind(record.in_stock)
        .bind(record.featured)
        .bind(record.is_custom)
        .bind(record.image_url.as_deref())
        .bind(record.gallery_json()?)
        .fetch_one(self.pool)
        .await?;

        Product::try_from(row)
    }

    /// Overwrite a product in place (no structural versioning).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn update(
        &self,
        id: ProductId,
        record: &ProductRecord,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products
             SET name = $2, description = $3, price = $4, category = $5, sizes = $6,
                 in_stock = $7, featured = $8, is_custom = $9, image_url = $10, gallery = $11,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.as_i32())
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(record.category.as_str())
        .bind(record.sizes_json()?)
        .bind(record.in_stock)
        .bind(record.featured)
        .bind(record.is_custom)
        .bind(record.image_url.as_deref())
        .bind(record.gallery_json()?)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Product::try_from(row)
    }

    /// Delete a product.
    ///
    /// Uploaded images are not removed; see the upload store's documented
    /// orphaned-file limitation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
