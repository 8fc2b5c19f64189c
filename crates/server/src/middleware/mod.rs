//! Request middleware: session layer and auth extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, RequireUser};
pub use session::{SESSION_COOKIE_NAME, create_session_layer, create_session_store};
