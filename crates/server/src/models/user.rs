//! User account domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stickerfly_core::{Email, UserId, UserRole};

/// A user account.
///
/// The password hash deliberately does not live on this type; it stays
/// inside the auth service and repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub notifications: NotificationPrefs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's saved address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Notification opt-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPrefs {
    pub order_updates: bool,
    pub promotions: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            order_updates: true,
            promotions: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn notification_prefs_default_to_order_updates_only() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.order_updates);
        assert!(!prefs.promotions);
    }

    #[test]
    fn missing_pref_fields_fall_back_to_defaults() {
        let prefs: NotificationPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, NotificationPrefs::default());
    }
}
