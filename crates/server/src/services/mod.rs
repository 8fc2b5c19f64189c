//! Application services.

pub mod auth;
pub mod uploads;

pub use auth::AuthService;
pub use uploads::UploadStore;
