use axum::{Json, extract::State, response::IntoResponse};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::courses::common::{CourseResponse, UpdateCourseRequest};

/// PUT /api/courses/{course_id}
///
/// Overwrites the provided fields; omitted fields are kept.
///
/// ### Errors
/// - `400 Bad Request`: "Course with this title already exists" if another course has the title
/// - `404 Not Found`: "Course not found"
pub async fn update_course(
    State(app_state): State<AppState>,
    Id(course_id): Id,
    ValidJson(req): ValidJson<UpdateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let course = CourseModel::update(
        app_state.db(),
        course_id,
        req.title,
        req.description,
        req.instructor,
    )
    .await?;
    Ok(Json(ApiResponse::ok(CourseResponse::from(course))))
}
