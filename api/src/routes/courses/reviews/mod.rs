//! Reviews scoped to a course: `/api/courses/{course_id}/reviews`.
//!
//! Editing and deleting a review happens under `/api/reviews/{review_id}`.

pub mod get;
pub mod post;
