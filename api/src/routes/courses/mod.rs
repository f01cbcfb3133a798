//! # Courses Routes Module
//!
//! Routes for the `/api/courses` endpoint group, including enrollment and the
//! course-scoped review endpoints.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_course;
use enrollments::{get::list_course_students, post::enroll_user};
use get::{get_course, list_courses};
use post::create_course;
use put::update_course;
use reviews::{get::list_course_reviews, post::add_review};
use util::state::AppState;

use crate::routes::users::get::list_user_courses;

pub mod common;
pub mod delete;
pub mod enrollments;
pub mod get;
pub mod post;
pub mod put;
pub mod reviews;

/// Builds the `/courses` route group.
///
/// - `GET /courses` → `list_courses`
/// - `POST /courses` → `create_course`
/// - `GET /courses/users/{user_id}/courses` → `list_user_courses`
/// - `GET /courses/{course_id}` → `get_course`
/// - `PUT /courses/{course_id}` → `update_course`
/// - `DELETE /courses/{course_id}` → `delete_course`
/// - `POST /courses/{course_id}/enroll` → `enroll_user`
/// - `GET /courses/{course_id}/students` → `list_course_students`
/// - `POST /courses/{course_id}/reviews` → `add_review`
/// - `GET /courses/{course_id}/reviews` → `list_course_reviews`
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/", post(create_course))
        .route("/users/{user_id}/courses", get(list_user_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(update_course))
        .route("/{course_id}", delete(delete_course))
        .route("/{course_id}/enroll", post(enroll_user))
        .route("/{course_id}/students", get(list_course_students))
        .route("/{course_id}/reviews", post(add_review))
        .route("/{course_id}/reviews", get(list_course_reviews))
}
