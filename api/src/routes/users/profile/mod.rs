//! Routes for the profile owned by a user, nested under `/api/users/{user_id}/profile`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_profile;
use get::get_profile;
use post::create_profile;
use put::update_profile;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// - `POST /users/{user_id}/profile` → `create_profile`
/// - `GET /users/{user_id}/profile` → `get_profile`
/// - `PUT /users/{user_id}/profile` → `update_profile`
/// - `DELETE /users/{user_id}/profile` → `delete_profile`
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile))
        .route("/", get(get_profile))
        .route("/", put(update_profile))
        .route("/", delete(delete_profile))
}
