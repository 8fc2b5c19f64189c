//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use stickerfly_core::{ProductCategory, ProductId, StickerSize};

use crate::db::products::{ProductRecord, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireUser};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Create/overwrite payload. The category arrives as text so an unknown
/// value is a 400, not a deserializer rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<StickerSize>,
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl ProductPayload {
    /// Validate and fill defaults, producing a storable record.
    fn into_record(self, is_custom: bool) -> Result<ProductRecord> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_owned()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description is required".to_owned()));
        }
        if self.price <= Decimal::ZERO {
            return Err(AppError::Validation("price must be positive".to_owned()));
        }
        let category: ProductCategory = self
            .category
            .parse()
            .map_err(|e| AppError::Validation(format!("{e}")))?;

        // Products are always orderable in at least one size.
        let sizes = if self.sizes.is_empty() {
            StickerSize::defaults()
        } else {
            self.sizes
        };

        Ok(ProductRecord {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price: self.price,
            category,
            sizes,
            in_stock: self.in_stock.unwrap_or(true),
            featured: self.featured,
            is_custom,
            image_url: self.image_url,
            gallery: self.gallery,
        })
    }
}

/// Payload for the custom-order flow: a customer-uploaded image becomes a
/// one-off product at the configured base price.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProductPayload {
    pub image_url: String,
    pub name: Option<String>,
    pub size: Option<StickerSize>,
}

/// List catalog products.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<ProductCategory>)
        .transpose()
        .map_err(|e| AppError::Validation(format!("{e}")))?;

    let products = ProductRepository::new(state.pool())
        .list(category, params.featured)
        .await?;
    Ok(Json(products))
}

/// Get one product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

/// Create a catalog product.
///
/// POST /api/products (admin)
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse> {
    let record = payload.into_record(false)?;
    let product = ProductRepository::new(state.pool()).create(&record).await?;
    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Create a one-off custom product from an uploaded image.
///
/// POST /api/products/custom (any session)
#[instrument(skip(state, payload), fields(user = %user.id))]
pub async fn create_custom(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(payload): Json<CustomProductPayload>,
) -> Result<impl IntoResponse> {
    if payload.image_url.trim().is_empty() {
        return Err(AppError::Validation("imageUrl is required".to_owned()));
    }

    let record = ProductRecord {
        name: payload
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Custom Sticker".to_owned()),
        description: "Custom die-cut sticker from uploaded artwork".to_owned(),
        price: state.config().custom_sticker_price,
        category: ProductCategory::Custom,
        sizes: payload.size.map_or_else(StickerSize::defaults, |s| vec![s]),
        in_stock: true,
        featured: false,
        is_custom: true,
        image_url: Some(payload.image_url),
        gallery: Vec::new(),
    };

    let product = ProductRepository::new(state.pool()).create(&record).await?;
    tracing::info!(product_id = %product.id, "custom product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Overwrite a product in place.
///
/// PUT /api/products/{id} (admin)
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse> {
    let repo = ProductRepository::new(state.pool());

    // Edits never change whether a product is a custom one-off.
    let existing = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let record = payload.into_record(existing.is_custom)?;
    let product = repo.update(id, &record).await?;
    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /api/products/{id} (admin)
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    ProductRepository::new(state.pool()).delete(id).await?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Robot Cat".to_owned(),
            description: "A robot cat sticker".to_owned(),
            price: Decimal::from(5),
            category: "logo".to_owned(),
            sizes: Vec::new(),
            in_stock: None,
            featured: false,
            image_url: None,
            gallery: Vec::new(),
        }
    }

    #[test]
    fn missing_sizes_get_the_standard_list() {
        let record = payload().into_record(false).unwrap();
        assert!(!record.sizes.is_empty());
        assert!(record.in_stock);
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        let mut p = payload();
        p.category = "vinyl".to_owned();
        assert!(matches!(
            p.into_record(false),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut p = payload();
        p.price = Decimal::ZERO;
        assert!(matches!(p.into_record(false), Err(AppError::Validation(_))));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut p = payload();
        p.name = "  ".to_owned();
        assert!(matches!(p.into_record(false), Err(AppError::Validation(_))));
    }
}
