use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

/// Builds the `/health` route group.
///
/// This includes a single `GET /health` endpoint that returns a basic success message.
/// It does not touch the database.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
