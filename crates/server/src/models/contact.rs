//! Contact form submission domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stickerfly_core::{ContactMessageId, Email};

/// A stored contact-form submission.
///
/// Submissions are persisted and logged for the support inbox; this service
/// does not send outbound mail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
