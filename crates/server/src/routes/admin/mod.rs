//! Admin API surfaces.
//!
//! Authorization contract: no session → 401, session without the admin role
//! → 403 (enforced by the `RequireAdmin` extractor).
//!
//! When `STICKERFLY_FIXTURES` is enabled, the *read* endpoints here serve
//! canned fixture data without a session, so a frontend can be developed
//! against an empty database. This is an explicit configuration switch, not
//! an environment-sniffing code fork, and it never applies to mutating
//! endpoints.

pub mod blog;
mod fixtures;
pub mod orders;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the `/api/admin` router.
#[must_use]
pub fn routes(use_fixtures: bool) -> Router<AppState> {
    let list_orders = if use_fixtures {
        get(fixtures::orders)
    } else {
        get(orders::list)
    };
    let list_posts = if use_fixtures {
        get(fixtures::posts)
    } else {
        get(blog::list)
    };

    Router::new()
        .route("/orders", list_orders.post(orders::create_for_user))
        .route("/blog", list_posts.post(blog::create))
        .route(
            "/blog/{slug}",
            get(blog::show)
                .put(blog::update)
                .patch(blog::patch)
                .delete(blog::destroy),
        )
}
