use axum::{Json, extract::State, response::IntoResponse};
use db::models::profile::Model as ProfileModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::profile::common::ProfileResponse;

/// GET /api/users/{user_id}/profile
///
/// ### Errors
/// - `404 Not Found`: "User not found", or "Profile not found for this user"
pub async fn get_profile(
    State(app_state): State<AppState>,
    Id(user_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let profile = ProfileModel::find_for_user(app_state.db(), user_id).await?;
    Ok(Json(ApiResponse::ok(ProfileResponse::from(profile))))
}
