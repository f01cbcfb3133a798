use axum::{Json, extract::State, response::IntoResponse};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::response::{ApiError, ApiResponse};
use crate::routes::reviews::common::ReviewResponse;

/// GET /api/reviews
///
/// Every review, newest first, with both the author and the course expanded.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [
///     {
///       "id": 7,
///       "rating": 5,
///       "comment": "Loved it",
///       "course": { "id": 3, "title": "Rust 101", "description": "Basics", "instructor": "Ferris" },
///       "user": { "id": 1, "username": "alice", "email": "alice@example.com" },
///       "created_at": "2025-10-14T08:00:00+00:00",
///       "updated_at": "2025-10-14T08:00:00+00:00"
///     }
///   ]
/// }
/// ```
pub async fn list_reviews(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let reviews = ReviewModel::find_all_with_user_and_course(app_state.db()).await?;
    let reviews: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(ApiResponse::list(reviews)))
}
