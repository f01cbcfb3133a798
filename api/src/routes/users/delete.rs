use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};

/// DELETE /api/users/{user_id}
///
/// Deletes the user row. Their profile, reviews and enrollments are not removed.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "message": "User deleted successfully" }
/// ```
/// - `404 Not Found`: "User not found"
pub async fn delete_user(
    State(app_state): State<AppState>,
    Id(user_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    UserModel::delete(app_state.db(), user_id).await?;
    Ok(Json(ApiResponse::acknowledged("User deleted successfully")))
}
