//! Admin order management.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use stickerfly_core::UserId;

use crate::db::orders::OrderRepository;
use crate::db::users::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::orders::{CheckoutRequest, compose_order};
use crate::state::AppState;

/// List every order.
///
/// GET /api/admin/orders
#[instrument(skip(state))]
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// Body for creating an order on a user's behalf.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckoutRequest {
    pub user_id: UserId,
    #[serde(flatten)]
    pub checkout: CheckoutRequest,
}

/// Compose an order for a named user (e.g. phone orders).
///
/// POST /api/admin/orders
#[instrument(skip(state, body), fields(admin = %admin.id))]
pub async fn create_for_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<AdminCheckoutRequest>,
) -> Result<impl IntoResponse> {
    UserRepository::new(state.pool())
        .get_by_id(body.user_id)
        .await?
        .ok_or_else(|| AppError::Validation(format!("unknown user {}", body.user_id)))?;

    let order = compose_order(&state, body.user_id, body.checkout).await?;
    tracing::info!(order_id = %order.id, admin_id = %admin.id, "order created by admin");
    Ok((StatusCode::CREATED, Json(order)))
}
