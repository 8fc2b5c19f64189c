//! Order route handlers, including the checkout order composer.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use stickerfly_core::{OrderId, OrderStatus, ProductId, UserId, pricing};

use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireUser};
use crate::models::order::{Order, OrderItem, PaymentInfo, ShippingAddress};
use crate::models::product::Product;
use crate::state::AppState;

/// One requested line of a checkout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: String,
    pub custom_image_url: Option<String>,
}

/// Payment details supplied at checkout. There is deliberately no `paid`
/// field: payment confirmation is not the client's claim to make.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayment {
    pub method: String,
    pub transaction_id: Option<String>,
}

/// Checkout request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub shipping_address: ShippingAddress,
    pub payment_info: CheckoutPayment,
    /// The total the client displayed. Optional; when present it must match
    /// the server-side recomputation exactly.
    pub total_amount: Option<Decimal>,
}

/// Price one checkout line against its product.
fn priced_item(product: &Product, requested: &CheckoutItem) -> Result<OrderItem> {
    if requested.quantity == 0 {
        return Err(AppError::Validation(format!(
            "quantity must be at least 1 for product {}",
            product.id
        )));
    }
    if product.size_named(&requested.size).is_none() {
        return Err(AppError::Validation(format!(
            "product {} has no size named {:?}",
            product.id, requested.size
        )));
    }

    Ok(OrderItem {
        product_id: product.id,
        product_name: product.name.clone(),
        quantity: requested.quantity,
        size: requested.size.clone(),
        custom_image_url: requested.custom_image_url.clone(),
        unit_price: product.price,
        line_total: pricing::line_total(product.price, requested.quantity),
    })
}

/// Compose and persist an order for a user: validate each line, price it
/// from stored product prices, and store the order as `pending`/unpaid.
pub(crate) async fn compose_order(
    state: &AppState,
    user_id: UserId,
    request: CheckoutRequest,
) -> Result<Order> {
    if request.items.is_empty() {
        return Err(AppError::Validation(
            "order must contain at least one item".to_owned(),
        ));
    }
    if !request.shipping_address.is_complete() {
        return Err(AppError::Validation(
            "shipping address is incomplete".to_owned(),
        ));
    }
    if request.payment_info.method.trim().is_empty() {
        return Err(AppError::Validation(
            "payment method is required".to_owned(),
        ));
    }

    let products = ProductRepository::new(state.pool());
    let mut items = Vec::with_capacity(request.items.len());
    for requested in &request.items {
        let product = products.get(requested.product_id).await?.ok_or_else(|| {
            AppError::Validation(format!("unknown product {}", requested.product_id))
        })?;
        items.push(priced_item(&product, requested)?);
    }

    let total: Decimal = items.iter().map(|i| i.line_total).sum();

    // The client's displayed total is checked, never trusted.
    if let Some(claimed) = request.total_amount
        && claimed != total
    {
        return Err(AppError::Validation(format!(
            "totalAmount {claimed} does not match the computed total {total}"
        )));
    }

    let payment = PaymentInfo {
        method: request.payment_info.method,
        transaction_id: request.payment_info.transaction_id,
        paid: false,
    };

    let order = OrderRepository::new(state.pool())
        .create(user_id, &items, total, &request.shipping_address, &payment)
        .await?;
    tracing::info!(order_id = %order.id, user_id = %user_id, total = %total, "order created");
    Ok(order)
}

/// Checkout: compose an order for the current user.
///
/// POST /api/orders
#[instrument(skip(state, request))]
pub async fn create(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse> {
    let order = compose_order(&state, user.id, request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List every order.
///
/// GET /api/orders (admin)
#[instrument(skip(state))]
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// List the current user's orders.
///
/// GET /api/orders/user
#[instrument(skip(state))]
pub async fn list_mine(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;
    Ok(Json(orders))
}

/// Get one order. Owners see their own; admins see any. Anyone else gets a
/// 404 rather than confirmation the order exists.
///
/// GET /api/orders/{id}
#[instrument(skip(state))]
pub async fn show(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse> {
    let order = OrderRepository::new(state.pool())
        .get(id)
        .await?
        .filter(|o| user.is_admin() || o.user_id == user.id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
    Ok(Json(order))
}

/// Admin status update body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: String,
    pub paid: Option<bool>,
}

/// Update an order's status and/or paid flag.
///
/// PUT /api/orders/{id} (admin)
#[instrument(skip(state))]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<OrderUpdate>,
) -> Result<impl IntoResponse> {
    let status: OrderStatus = body
        .status
        .parse()
        .map_err(|e| AppError::Validation(format!("{e}")))?;

    let order = OrderRepository::new(state.pool())
        .update_status(id, status, body.paid)
        .await?;
    tracing::info!(order_id = %id, status = %status, "order updated");
    Ok(Json(order))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use stickerfly_core::{ProductCategory, StickerSize};

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Robot Cat".into(),
            description: "d".into(),
            price: Decimal::from(5),
            category: ProductCategory::Logo,
            sizes: StickerSize::defaults(),
            in_stock: true,
            featured: false,
            is_custom: false,
            image_url: None,
            gallery: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item(quantity: u32, size: &str) -> CheckoutItem {
        CheckoutItem {
            product_id: ProductId::new(1),
            quantity,
            size: size.to_owned(),
            custom_image_url: None,
        }
    }

    #[test]
    fn prices_a_line_with_the_volume_discount() {
        let line = priced_item(&product(), &item(30, "Medium")).unwrap();
        assert_eq!(line.unit_price, Decimal::from(5));
        // 5 × 30 × 0.9
        assert_eq!(line.line_total, Decimal::from(135));
    }

    #[test]
    fn rejects_a_size_the_product_does_not_offer() {
        let err = priced_item(&product(), &item(1, "Gigantic")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = priced_item(&product(), &item(0, "Small")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn checkout_payment_has_no_paid_field() {
        // A client asserting paid:true must not be able to smuggle it in.
        let payment: CheckoutPayment =
            serde_json::from_str(r#"{"method":"card","paid":true}"#).unwrap();
        assert_eq!(payment.method, "card");
    }
}
