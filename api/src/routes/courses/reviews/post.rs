use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::reviews::common::{CreateReviewRequest, ReviewResponse};

/// POST /api/courses/{course_id}/reviews
///
/// Adds a review. A user may review a course once.
///
/// ### Request Body
/// ```json
/// { "rating": 5, "comment": "Loved it", "userId": 1 }
/// ```
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 7,
///     "rating": 5,
///     "comment": "Loved it",
///     "course": 3,
///     "user": { "id": 1, "username": "alice", "email": "alice@example.com" },
///     "created_at": "2025-10-14T08:00:00+00:00",
///     "updated_at": "2025-10-14T08:00:00+00:00"
///   }
/// }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: rating outside 1..=5, or "User has already reviewed this course"
/// - `404 Not Found`: "Course not found", or "User not found"
pub async fn add_review(
    State(app_state): State<AppState>,
    Id(course_id): Id,
    ValidJson(req): ValidJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let review = ReviewModel::create(
        app_state.db(),
        course_id,
        req.user_id,
        req.rating,
        req.comment,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReviewResponse::from(review))),
    ))
}
