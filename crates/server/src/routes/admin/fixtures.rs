//! Canned responses for fixture mode.
//!
//! Served from the admin read endpoints when `STICKERFLY_FIXTURES` is on,
//! so a frontend can be built against a recognizable payload shape without
//! a seeded database or a session. Shapes mirror the real handlers' output.

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Fixture response for GET /api/admin/orders.
pub async fn orders() -> impl IntoResponse {
    Json(json!([
        {
            "id": 1,
            "userId": 1,
            "items": [
                {
                    "productId": 1,
                    "productName": "Robot Cat",
                    "quantity": 30,
                    "size": "Medium",
                    "unitPrice": 5.0,
                    "lineTotal": 135.0
                }
            ],
            "total": 135.0,
            "shippingAddress": {
                "name": "Ada Lovelace",
                "street": "1 Analytical Way",
                "city": "London",
                "state": "LDN",
                "zip": "E1 6AN",
                "country": "GB"
            },
            "payment": { "method": "card", "transactionId": "tx_fixture_1", "paid": false },
            "status": "pending",
            "createdAt": "2026-01-15T10:30:00Z",
            "updatedAt": "2026-01-15T10:30:00Z"
        },
        {
            "id": 2,
            "userId": 2,
            "items": [
                {
                    "productId": 3,
                    "productName": "Holo Planet",
                    "quantity": 100,
                    "size": "Large",
                    "unitPrice": 4.0,
                    "lineTotal": 280.0
                }
            ],
            "total": 280.0,
            "shippingAddress": {
                "name": "Grace Hopper",
                "street": "90 Compiler Ct",
                "city": "Arlington",
                "state": "VA",
                "zip": "22201",
                "country": "US"
            },
            "payment": { "method": "paypal", "paid": true },
            "status": "shipped",
            "createdAt": "2026-01-10T08:00:00Z",
            "updatedAt": "2026-01-12T16:45:00Z"
        }
    ]))
}

/// Fixture response for GET /api/admin/blog.
pub async fn posts() -> impl IntoResponse {
    Json(json!([
        {
            "slug": "sticker-care-guide",
            "title": "Sticker Care Guide",
            "excerpt": "Five ways to make your stickers last for years.",
            "contentHtml": "<p>Wash cold, air dry, and avoid the dishwasher's top rack.</p>",
            "author": "Mia Torres",
            "authorRole": "Founder",
            "publishedOn": "2026-01-08",
            "readTimeMinutes": 4,
            "imageUrl": "/uploads/fixture-care.jpg",
            "featured": true,
            "published": true,
            "tags": ["care", "vinyl"],
            "createdAt": "2026-01-08T09:00:00Z",
            "updatedAt": "2026-01-08T09:00:00Z"
        },
        {
            "slug": "designing-for-die-cut",
            "title": "Designing for Die-Cut",
            "excerpt": "Bleed, margins, and why your outline matters.",
            "contentHtml": "<p>Leave at least an eighth of an inch of bleed.</p>",
            "author": "Jo Park",
            "authorRole": "Production",
            "publishedOn": "2025-12-02",
            "readTimeMinutes": 6,
            "featured": false,
            "published": false,
            "tags": ["design"],
            "createdAt": "2025-12-02T14:20:00Z",
            "updatedAt": "2026-01-03T11:05:00Z"
        }
    ]))
}
