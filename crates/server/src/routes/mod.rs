//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (DB ping)
//!
//! # Blog (rendered pages)
//! GET  /blog                       - Published post index
//! GET  /blog/{slug}                - Single post page
//!
//! # Catalog
//! GET    /api/products             - Product listing (?category=, ?featured=)
//! POST   /api/products             - Create product (admin)
//! POST   /api/products/custom      - Create custom product from an upload
//! GET    /api/products/{id}        - Product detail
//! PUT    /api/products/{id}        - Overwrite product (admin)
//! DELETE /api/products/{id}        - Delete product (admin)
//!
//! # Orders
//! POST /api/orders                 - Checkout (order composer)
//! GET  /api/orders                 - All orders (admin)
//! GET  /api/orders/user            - Own orders
//! GET  /api/orders/{id}            - One order (owner or admin)
//! PUT  /api/orders/{id}            - Update status/paid flag (admin)
//!
//! # Admin
//! GET    /api/admin/orders         - All orders (fixture-capable read)
//! POST   /api/admin/orders         - Create an order on a user's behalf
//! GET    /api/admin/blog           - All posts (fixture-capable read)
//! POST   /api/admin/blog           - Create post
//! GET    /api/admin/blog/{slug}    - One post
//! PUT    /api/admin/blog/{slug}    - Overwrite post (slug rename allowed)
//! PATCH  /api/admin/blog/{slug}    - Partial update
//! DELETE /api/admin/blog/{slug}    - Delete post
//!
//! # Account
//! POST /api/auth/signup            - Register
//! POST /api/auth/login             - Login
//! POST /api/auth/logout            - Logout
//! GET  /api/user/profile           - Own profile
//! PUT  /api/user/profile           - Update profile / change password
//!
//! # Misc
//! POST /api/upload                 - Image upload (multipart)
//! POST /api/contact                - Contact form submission
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod orders;
pub mod products;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::services::uploads::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Headroom on top of the file-size limit for multipart framing.
const UPLOAD_BODY_SLACK: usize = 64 * 1024;

/// Build the full application router (minus health checks and static files).
#[must_use]
pub fn routes(fixtures: bool) -> Router<AppState> {
    Router::new()
        .merge(blog::routes())
        .nest("/api", api_routes(fixtures))
}

fn api_routes(fixtures: bool) -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/custom", post(products::create_custom))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route("/orders", get(orders::list_all).post(orders::create))
        .route("/orders/user", get(orders::list_mine))
        .route("/orders/{id}", get(orders::show).put(orders::update))
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_BODY_SLACK)),
        )
        .route(
            "/user/profile",
            get(account::profile).put(account::update_profile),
        )
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/contact", post(contact::submit))
        .nest("/admin", admin::routes(fixtures))
}
