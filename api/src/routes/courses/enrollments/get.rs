use axum::{Json, extract::State, response::IntoResponse};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};
use crate::routes::users::common::UserSummary;

/// GET /api/courses/{course_id}/students
///
/// Students in enrollment order.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     { "id": 1, "username": "alice", "email": "alice@example.com" }
///   ]
/// }
/// ```
///
/// ### Errors
/// - `404 Not Found`: "Course not found"
pub async fn list_course_students(
    State(app_state): State<AppState>,
    Id(course_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let course = CourseModel::find_with_students(app_state.db(), course_id).await?;
    let students: Vec<UserSummary> = course.students.into_iter().map(UserSummary::from).collect();
    Ok(Json(ApiResponse::list(students)))
}
