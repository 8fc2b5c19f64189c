//! Integration tests for the product catalog and checkout pricing.
//!
//! Requires a running server with a migrated database and an admin account
//! (see the crate docs). Run with: `cargo test -- --ignored`

use reqwest::StatusCode;
use serde_json::json;

use stickerfly_integration_tests::{admin_client, base_url, create_test_product, signed_up_client};

#[tokio::test]
#[ignore = "Requires running server and admin account"]
async fn product_create_read_and_discounted_checkout() {
    let admin = admin_client().await;

    // POST /api/products with price 5 -> 201 with price 5
    let product = create_test_product(&admin, 5).await;
    assert_eq!(product["price"], json!(5.0));
    let id = product["id"].as_i64().expect("product id");

    // GET it back by id: same price
    let fetched: serde_json::Value = admin
        .get(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("get product failed")
        .json()
        .await
        .expect("invalid product JSON");
    assert_eq!(fetched["price"], product["price"]);

    // Checkout 30 at $5: total is 5 * 30 * 0.9 = 135
    let (customer, _) = signed_up_client().await;
    let resp = customer
        .post(format!("{}/api/orders", base_url()))
        .json(&json!({
            "items": [{ "productId": id, "quantity": 30, "size": "Medium" }],
            "shippingAddress": {
                "name": "Test User", "street": "1 Test St", "city": "Testville",
                "state": "TS", "zip": "00000", "country": "US"
            },
            "paymentInfo": { "method": "card" },
            "totalAmount": 135,
        }))
        .send()
        .await
        .expect("checkout failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let order: serde_json::Value = resp.json().await.expect("invalid order JSON");
    assert_eq!(order["total"], json!(135.0));
    assert_eq!(order["status"], json!("pending"));
    assert_eq!(order["payment"]["paid"], json!(false));
}

#[tokio::test]
#[ignore = "Requires running server and admin account"]
async fn lying_total_is_rejected() {
    let admin = admin_client().await;
    let product = create_test_product(&admin, 5).await;
    let id = product["id"].as_i64().expect("product id");

    let (customer, _) = signed_up_client().await;
    let resp = customer
        .post(format!("{}/api/orders", base_url()))
        .json(&json!({
            "items": [{ "productId": id, "quantity": 30, "size": "Medium" }],
            "shippingAddress": {
                "name": "Test User", "street": "1 Test St", "city": "Testville",
                "state": "TS", "zip": "00000", "country": "US"
            },
            "paymentInfo": { "method": "card" },
            "totalAmount": 1,
        }))
        .send()
        .await
        .expect("checkout failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.expect("invalid error JSON");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn unknown_size_is_rejected() {
    let admin = admin_client().await;
    let product = create_test_product(&admin, 3).await;
    let id = product["id"].as_i64().expect("product id");

    let (customer, _) = signed_up_client().await;
    let resp = customer
        .post(format!("{}/api/orders", base_url()))
        .json(&json!({
            "items": [{ "productId": id, "quantity": 1, "size": "Billboard" }],
            "shippingAddress": {
                "name": "Test User", "street": "1 Test St", "city": "Testville",
                "state": "TS", "zip": "00000", "country": "US"
            },
            "paymentInfo": { "method": "card" },
        }))
        .send()
        .await
        .expect("checkout failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
