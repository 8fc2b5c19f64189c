//! Contact form route handlers.
//!
//! Submissions are validated and stored for the support inbox. No outbound
//! mail is sent from this service.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use stickerfly_core::Email;

use crate::db::contact::ContactRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse> {
    let email =
        Email::parse(&form.email).map_err(|e| AppError::Validation(format!("invalid email: {e}")))?;
    if form.name.trim().is_empty() || form.message.trim().is_empty() {
        return Err(AppError::Validation(
            "name and message are required".to_owned(),
        ));
    }

    let stored = ContactRepository::new(state.pool())
        .create(
            form.name.trim(),
            &email,
            form.subject.as_deref().map(str::trim).filter(|s| !s.is_empty()),
            form.message.trim(),
        )
        .await?;

    tracing::info!(message_id = %stored.id, email = %stored.email, "contact message stored");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": stored.id })),
    ))
}
