//! Enrollment of users in courses.
//!
//! Both listings read the same enrollment rows, so a course's students and a
//! user's courses always agree.

pub mod common;
pub mod get;
pub mod post;
