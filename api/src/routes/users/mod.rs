//! # Users Routes Module
//!
//! This module defines and wires up routes for the `/api/users` endpoint group.
//!
//! ## Structure
//! - `get.rs`: GET handlers (list users, get user, list a user's courses)
//! - `post.rs`: POST handlers (create user)
//! - `put.rs`: PUT handlers (update user)
//! - `delete.rs`: DELETE handlers (delete user)
//! - `profile/`: the single profile owned by a user

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_user;
use get::{get_user, list_user_courses, list_users};
use post::create_user;
use profile::profile_routes;
use put::update_user;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod profile;
pub mod put;

/// Builds the `/users` route group, mapping HTTP methods to handlers.
///
/// - `GET /users` → `list_users`
/// - `POST /users` → `create_user`
/// - `GET /users/{user_id}` → `get_user`
/// - `PUT /users/{user_id}` → `update_user`
/// - `DELETE /users/{user_id}` → `delete_user`
/// - `GET /users/{user_id}/courses` → `list_user_courses`
/// - `/users/{user_id}/profile` → see [`profile_routes`]
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}", put(update_user))
        .route("/{user_id}", delete(delete_user))
        .route("/{user_id}/courses", get(list_user_courses))
        .nest("/{user_id}/profile", profile_routes())
}
