//! Profile route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::db::users::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::user::{Address, NotificationPrefs};
use crate::services::AuthService;
use crate::state::AppState;

/// Profile update body. Everything is optional; omitted fields keep their
/// stored values. A password change requires the current password.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub notifications: Option<NotificationPrefs>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Get the current user's profile.
///
/// GET /api/user/profile
#[instrument(skip(state))]
pub async fn profile(
    RequireUser(current): RequireUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let user = UserRepository::new(state.pool())
        .get_by_id(current.id)
        .await?
        .ok_or_else(|| AppError::NotFound("account no longer exists".to_owned()))?;
    Ok(Json(user))
}

/// Update the current user's profile, optionally changing the password.
///
/// PUT /api/user/profile
#[instrument(skip(state, body), fields(user = %current.id))]
pub async fn update_profile(
    RequireUser(current): RequireUser,
    State(state): State<AppState>,
    Json(body): Json<ProfileUpdate>,
) -> Result<impl IntoResponse> {
    let repo = UserRepository::new(state.pool());
    let user = repo
        .get_by_id(current.id)
        .await?
        .ok_or_else(|| AppError::NotFound("account no longer exists".to_owned()))?;

    if let Some(new_password) = &body.new_password {
        let current_password = body.current_password.as_deref().ok_or_else(|| {
            AppError::Validation("currentPassword is required to set a new password".to_owned())
        })?;
        AuthService::new(state.pool())
            .change_password(user.id, &user.email, current_password, new_password)
            .await?;
        tracing::info!(user_id = %user.id, "password changed");
    }

    let name = body.name.unwrap_or_else(|| user.name.clone());
    if name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_owned()));
    }
    let phone = body.phone.or(user.phone);
    let address = body.address.or(user.address);
    let notifications = body.notifications.unwrap_or(user.notifications);

    let updated = repo
        .update_profile(
            user.id,
            name.trim(),
            phone.as_deref(),
            address.as_ref(),
            notifications,
        )
        .await?;
    Ok(Json(updated))
}
