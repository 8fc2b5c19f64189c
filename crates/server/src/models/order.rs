//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stickerfly_core::{OrderId, OrderStatus, ProductId, UserId};

/// A priced line item within an order.
///
/// The unit price is captured from the product at composition time, so later
/// catalog edits don't rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    /// Denormalized for display in order history.
    pub product_name: String,
    pub quantity: u32,
    /// Name of the selected size on the product.
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image_url: Option<String>,
    pub unit_price: Decimal,
    /// `unit_price × quantity` with the volume discount applied.
    pub line_total: Decimal,
}

/// Where the order ships.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl ShippingAddress {
    /// All fields an order needs to actually ship.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ![
            &self.name,
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .iter()
        .any(|f| f.trim().is_empty())
    }
}

/// Payment record attached to an order.
///
/// `paid` is never taken from the checkout client; it starts `false` and is
/// flipped by an admin once payment is verified out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub paid: bool,
}

/// A persisted order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    /// Sum of line totals, recomputed server-side at composition time.
    pub total: Decimal,
    pub shipping_address: ShippingAddress,
    pub payment: PaymentInfo,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            name: "Ada Lovelace".into(),
            street: "1 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip: "E1 6AN".into(),
            country: "GB".into(),
        }
    }

    #[test]
    fn complete_address_passes() {
        assert!(address().is_complete());
    }

    #[test]
    fn blank_field_fails_completeness() {
        let mut addr = address();
        addr.city = "   ".into();
        assert!(!addr.is_complete());
    }

    #[test]
    fn payment_paid_defaults_to_false_when_absent() {
        let payment: PaymentInfo =
            serde_json::from_str(r#"{"method":"card","transactionId":"tx_1"}"#).unwrap();
        assert!(!payment.paid);
        assert_eq!(payment.transaction_id.as_deref(), Some("tx_1"));
    }
}
