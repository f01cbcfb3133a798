use axum::{Json, extract::State, response::IntoResponse};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};
use crate::routes::reviews::common::ReviewResponse;

/// GET /api/courses/{course_id}/reviews
///
/// Reviews of the course, newest first, with the author expanded.
///
/// ### Errors
/// - `404 Not Found`: "Course not found"
pub async fn list_course_reviews(
    State(app_state): State<AppState>,
    Id(course_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = ReviewModel::find_for_course(app_state.db(), course_id).await?;
    let reviews: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(ApiResponse::list(reviews)))
}
