use axum::{Json, extract::State, response::IntoResponse};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::extract::{Id, ValidJson};
use crate::response::{ApiError, ApiResponse};
use crate::routes::reviews::common::{ReviewResponse, UpdateReviewRequest};

/// PUT /api/reviews/{review_id}
///
/// Overwrites `rating` and/or `comment`; omitted fields are kept.
///
/// ### Request Body
/// ```json
/// { "rating": 4 }
/// ```
///
/// ### Errors
/// - `400 Bad Request`: rating outside 1..=5
/// - `404 Not Found`: "Review not found"
pub async fn update_review(
    State(app_state): State<AppState>,
    Id(review_id): Id,
    ValidJson(req): ValidJson<UpdateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let review = ReviewModel::update(app_state.db(), review_id, req.rating, req.comment).await?;
    Ok(Json(ApiResponse::ok(ReviewResponse::from(review))))
}
