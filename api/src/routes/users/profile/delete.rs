use axum::{Json, extract::State, response::IntoResponse};
use db::models::profile::Model as ProfileModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};

/// DELETE /api/users/{user_id}/profile
///
/// ### Responses
/// - `200 OK`: "Profile deleted successfully"
/// - `404 Not Found`: "User not found", or "Profile not found for this user"
pub async fn delete_profile(
    State(app_state): State<AppState>,
    Id(user_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    ProfileModel::delete_for_user(app_state.db(), user_id).await?;
    Ok(Json(ApiResponse::acknowledged("Profile deleted successfully")))
}
