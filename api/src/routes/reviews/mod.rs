use axum::{
    Router,
    routing::{delete, get, put},
};
use delete::delete_review;
use get::list_reviews;
use put::update_review;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod put;

/// Builds the `/reviews` route group.
///
/// - `GET /reviews` → `list_reviews`
/// - `PUT /reviews/{review_id}` → `update_review`
/// - `DELETE /reviews/{review_id}` → `delete_review`
pub fn reviews_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews))
        .route("/{review_id}", put(update_review))
        .route("/{review_id}", delete(delete_review))
}
