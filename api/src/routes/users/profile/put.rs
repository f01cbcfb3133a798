use axum::{Json, extract::State, response::IntoResponse};
use db::models::profile::Model as ProfileModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::profile::common::{ProfileRequest, ProfileResponse};

/// PUT /api/users/{user_id}/profile
///
/// Overwrites `bio` and/or `website`; omitted fields are kept.
///
/// ### Errors
/// - `404 Not Found`: "User not found", or "Profile not found for this user"
pub async fn update_profile(
    State(app_state): State<AppState>,
    Id(user_id): Id,
    ValidJson(req): ValidJson<ProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile =
        ProfileModel::update_for_user(app_state.db(), user_id, req.bio, req.website).await?;
    Ok(Json(ApiResponse::ok(ProfileResponse::from(profile))))
}
