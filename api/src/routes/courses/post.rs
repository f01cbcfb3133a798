use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::extract::ValidJson;
use crate::response::{ApiError, ApiResponse};
use crate::routes::courses::common::{CourseResponse, CreateCourseRequest};

/// POST /api/courses
///
/// ### Request Body
/// ```json
/// {
///   "title": "Rust 101",
///   "description": "Ownership, borrowing and lifetimes",
///   "instructor": "Ferris"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the course (`students` is empty)
/// - `400 Bad Request`: "Course with this title already exists"
pub async fn create_course(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let course =
        CourseModel::create(app_state.db(), &req.title, req.description, req.instructor).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CourseResponse::from(course))),
    ))
}
