//! # User Creation Route
//!
//! - `POST /api/users`: Create a user

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::extract::ValidJson;
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::common::{CreateUserRequest, UserResponse};

/// POST /api/users
///
/// Creates a user. `username` and `email` must both be unused.
///
/// ### Request Body
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "alice",
///     "email": "alice@example.com",
///     "courses": [],
///     "created_at": "2025-10-14T08:00:00+00:00",
///     "updated_at": "2025-10-14T08:00:00+00:00"
///   }
/// }
/// ```
///
/// ### Errors:
/// - 400 Bad Request: Validation failure, malformed JSON, or
///   "User with this email or username already exists"
pub async fn create_user(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserModel::create(app_state.db(), &req.username, &req.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}
