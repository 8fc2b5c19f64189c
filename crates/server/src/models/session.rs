//! Session-stored types.

use serde::{Deserialize, Serialize};

use stickerfly_core::{UserId, UserRole};

use super::user::User;

/// Keys under which values are stored in the session.
pub mod session_keys {
    /// The logged-in user, if any.
    pub const CURRENT_USER: &str = "current_user";
}

/// The authenticated user, as carried in the session cookie's server-side
/// record. Kept small; the full profile is re-read from the database when
/// needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Whether this session may use the admin surfaces.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.as_str().to_owned(),
            role: user.role,
        }
    }
}
