use axum::{Json, extract::State, response::IntoResponse};
use db::models::{course::Model as CourseModel, enrollment::Model as EnrollmentModel};
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::courses::common::CourseResponse;
use crate::routes::courses::enrollments::common::EnrollRequest;

/// POST /api/courses/{course_id}/enroll
///
/// Enrolls a user in a course. The course is checked before the user.
///
/// ### Request Body
/// ```json
/// { "userId": 1 }
/// ```
/// `user_id` is accepted as well.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 3,
///     "title": "Rust 101",
///     "description": "Basics",
///     "instructor": "Ferris",
///     "students": [
///       { "id": 1, "username": "alice", "email": "alice@example.com" }
///     ],
///     "created_at": "2025-10-14T08:00:00+00:00",
///     "updated_at": "2025-10-14T08:00:00+00:00"
///   },
///   "message": "User enrolled successfully"
/// }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: "User is already enrolled in this course"
/// - `404 Not Found`: "Course not found", or "User not found"
pub async fn enroll_user(
    State(app_state): State<AppState>,
    Id(course_id): Id,
    ValidJson(req): ValidJson<EnrollRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = app_state.db();
    EnrollmentModel::enroll(db, course_id, req.user_id).await?;

    let course = CourseModel::find_with_students(db, course_id).await?;
    Ok(Json(ApiResponse::success(
        CourseResponse::from(course),
        "User enrolled successfully",
    )))
}
