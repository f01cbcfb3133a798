//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by resource, each group in its own module:
//! - `/health` → Liveness check
//! - `/users` → Users, their courses, and their profile (`/users/{user_id}/profile`)
//! - `/courses` → Courses, enrollment, and course reviews
//! - `/reviews` → Review listing, editing, and deletion

use crate::routes::{
    courses::courses_routes, health::health_routes, reviews::reviews_routes, users::users_routes,
};
use axum::Router;
use util::state::AppState;

pub mod courses;
pub mod health;
pub mod reviews;
pub mod users;

/// Builds the router for everything under `/api`, bound to `app_state`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/users", users_routes())
        .nest("/courses", courses_routes())
        .nest("/reviews", reviews_routes())
        .with_state(app_state)
}
