use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::profile::Model as ProfileModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::profile::common::{ProfileRequest, ProfileResponse};

/// POST /api/users/{user_id}/profile
///
/// Creates the profile of a user. A user has at most one profile.
///
/// ### Request Body
/// ```json
/// { "bio": "Backend developer", "website": "https://alice.dev" }
/// ```
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "user": { "id": 1, "username": "alice", "email": "alice@example.com" },
///     "bio": "Backend developer",
///     "website": "https://alice.dev",
///     "created_at": "2025-10-14T08:00:00+00:00",
///     "updated_at": "2025-10-14T08:00:00+00:00"
///   }
/// }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: "Profile already exists for this user"
/// - `404 Not Found`: "User not found"
pub async fn create_profile(
    State(app_state): State<AppState>,
    Id(user_id): Id,
    ValidJson(req): ValidJson<ProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = ProfileModel::create(app_state.db(), user_id, req.bio, req.website).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ProfileResponse::from(profile))),
    ))
}
