//! Domain models.
//!
//! These are validated domain objects; the raw database row types live in
//! the `db` module and convert into these via `TryFrom`.

pub mod contact;
pub mod order;
pub mod post;
pub mod product;
pub mod session;
pub mod user;

pub use contact::ContactMessage;
pub use order::{Order, OrderItem, PaymentInfo, ShippingAddress};
pub use post::BlogPost;
pub use product::Product;
pub use session::{CurrentUser, session_keys};
pub use user::{Address, NotificationPrefs, User};
