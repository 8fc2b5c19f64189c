//! Integration tests for StickerFly.
//!
//! These tests drive a running server over HTTP and are `#[ignore]`d by
//! default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p stickerfly-cli -- migrate
//!
//! # Start the server
//! cargo run -p stickerfly-server
//!
//! # Run integration tests
//! cargo test -p stickerfly-integration-tests -- --ignored
//! ```
//!
//! An admin account must exist for the admin tests; promote one with:
//! `UPDATE users SET role = 'admin' WHERE email = '<ADMIN_EMAIL>'` and set
//! `ADMIN_EMAIL` / `ADMIN_PASSWORD` in the environment.

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("STICKERFLY_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A cookie-holding HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Sign up a fresh throwaway user and return the logged-in client and the
/// user's email.
///
/// # Panics
///
/// Panics if the signup request fails.
pub async fn signed_up_client() -> (Client, String) {
    let client = client();
    let email = format!("test-{}@example.com", Uuid::new_v4().simple());

    let resp = client
        .post(format!("{}/api/auth/signup", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "a-perfectly-fine-password",
        }))
        .send()
        .await
        .expect("signup request failed");
    assert!(
        resp.status().is_success(),
        "signup returned {}",
        resp.status()
    );

    (client, email)
}

/// Log in as the configured admin account.
///
/// # Panics
///
/// Panics if `ADMIN_EMAIL`/`ADMIN_PASSWORD` are unset or login fails.
pub async fn admin_client() -> Client {
    let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL not set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD not set");

    let client = client();
    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("admin login request failed");
    assert!(
        resp.status().is_success(),
        "admin login returned {}",
        resp.status()
    );

    client
}

/// Create a throwaway product as admin and return its JSON record.
///
/// # Panics
///
/// Panics if the create request fails.
pub async fn create_test_product(admin: &Client, price: u32) -> Value {
    let resp = admin
        .post(format!("{}/api/products", base_url()))
        .json(&json!({
            "name": format!("Test Sticker {}", Uuid::new_v4().simple()),
            "description": "integration test product",
            "price": price,
            "category": "logo",
        }))
        .send()
        .await
        .expect("product create request failed");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("invalid product JSON")
}
