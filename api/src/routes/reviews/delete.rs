use axum::{Json, extract::State, response::IntoResponse};
use db::models::review::Model as ReviewModel;
use util::state::AppState;

use crate::extract::Id;
use crate::response::{ApiError, ApiResponse};

/// DELETE /api/reviews/{review_id}
///
/// ### Responses
/// - `200 OK`: "Review deleted successfully"
/// - `404 Not Found`: "Review not found"
pub async fn delete_review(
    State(app_state): State<AppState>,
    Id(review_id): Id,
) -> Result<impl IntoResponse, ApiError> {
    ReviewModel::delete(app_state.db(), review_id).await?;
    Ok(Json(ApiResponse::acknowledged("Review deleted successfully")))
}
