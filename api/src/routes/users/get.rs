use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};
use crate::routes::courses::common::CourseSummary;
use crate::routes::users::common::UserResponse;

/// GET /api/users
///
/// Lists every user with the courses they are enrolled in.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     {
///       "id": 1,
///       "username": "alice",
///       "email": "alice@example.com",
///       "courses": [
///         { "id": 3, "title": "Rust 101", "description": "Basics", "instructor": "Ferris" }
///       ],
///       "created_at": "2025-10-14T08:00:00+00:00",
///       "updated_at": "2025-10-14T08:00:00+00:00"
///     }
///   ]
/// }
/// ```
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = UserModel::find_all_with_courses(app_state.db()).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::list(users)))
}

/// GET /api/users/{user_id}
///
/// ### Responses
/// - `200 OK` with the user and their courses
/// - `404 Not Found`: "User not found"
pub async fn get_user(
    State(app_state): State<AppState>,
    Id(user_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserModel::find_with_courses(app_state.db(), user_id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// GET /api/courses/users/{user_id}/courses
///
/// Also mounted as `GET /api/users/{user_id}/courses`.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     { "id": 3, "title": "Rust 101", "description": "Basics", "instructor": "Ferris" }
///   ]
/// }
/// ```
///
/// ### Errors
/// - `404 Not Found`: "User not found"
pub async fn list_user_courses(
    State(app_state): State<AppState>,
    Id(user_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserModel::find_with_courses(app_state.db(), user_id).await?;
    let courses: Vec<CourseSummary> = user.courses.into_iter().map(CourseSummary::from).collect();
    Ok(Json(ApiResponse::list(courses)))
}
