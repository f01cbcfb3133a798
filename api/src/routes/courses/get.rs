use axum::{Json, extract::State, response::IntoResponse};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};
use crate::routes::courses::common::CourseResponse;

/// GET /api/courses
///
/// Lists every course with its enrolled students.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     {
///       "id": 3,
///       "title": "Rust 101",
///       "description": "Basics",
///       "instructor": "Ferris",
///       "students": [
///         { "id": 1, "username": "alice", "email": "alice@example.com" }
///       ],
///       "created_at": "2025-10-14T08:00:00+00:00",
///       "updated_at": "2025-10-14T08:00:00+00:00"
///     }
///   ]
/// }
/// ```
pub async fn list_courses(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let courses = CourseModel::find_all_with_students(app_state.db()).await?;
    let courses: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
    Ok(Json(ApiResponse::list(courses)))
}

/// GET /api/courses/{course_id}
///
/// ### Errors
/// - `404 Not Found`: "Course not found"
pub async fn get_course(
    State(app_state): State<AppState>,
    Id(course_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let course = CourseModel::find_with_students(app_state.db(), course_id).await?;
    Ok(Json(ApiResponse::ok(CourseResponse::from(course))))
}
