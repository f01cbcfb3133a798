use axum::{Json, extract::State, response::IntoResponse};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};

/// DELETE /api/courses/{course_id}
///
/// Deletes the course row. Its enrollments and reviews are not removed.
///
/// ### Responses
/// - `200 OK`: "Course deleted successfully"
/// - `404 Not Found`: "Course not found"
pub async fn delete_course(
    State(app_state): State<AppState>,
    Id(course_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    CourseModel::delete(app_state.db(), course_id).await?;
    Ok(Json(ApiResponse::acknowledged("Course deleted successfully")))
}
