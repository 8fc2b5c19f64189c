//! Image upload route handler.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::services::uploads::UploadError;
use crate::state::AppState;

/// Accept one image file from a multipart form and store it.
///
/// POST /api/upload (any session)
///
/// The file must arrive in a field named `file`. Responds with the public
/// URL of the stored image, e.g. `{"url": "/uploads/<name>.png"}`.
#[instrument(skip(state, multipart), fields(user = %user.id))]
pub async fn upload(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().map(ToOwned::to_owned);
        let content_type = field.content_type().unwrap_or_default().to_owned();
        // The body limit layer caps what this can read; a larger file fails
        // here instead of buffering without bound.
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read file: {e}")))?;

        let url = state
            .uploads()
            .store(original_name.as_deref(), &content_type, data.to_vec())
            .await?;

        tracing::info!(%url, user_id = %user.id, "file uploaded");
        return Ok((StatusCode::CREATED, Json(json!({ "url": url }))));
    }

    Err(UploadError::MissingFile.into())
}
