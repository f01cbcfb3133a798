use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::common::{UpdateUserRequest, UserResponse};

/// PUT /api/users/{user_id}
///
/// Updates a user's `username` and/or `email`. Omitted fields are kept.
///
/// ### Request Body
/// ```json
/// { "email": "alice@new.example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user and their courses
/// - `400 Bad Request`: "Email or username already exists" when a value belongs to another user
/// - `404 Not Found`: "User not found"
pub async fn update_user(
    State(app_state): State<AppState>,
    Id(user_id): Id,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserModel::update(app_state.db(), user_id, req.username, req.email).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
