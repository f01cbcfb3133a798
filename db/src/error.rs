//! Store-level error type shared by every entity operation.

use sea_orm::{DbErr, SqlErr};

pub const USER_NOT_FOUND: &str = "User not found";
pub const COURSE_NOT_FOUND: &str = "Course not found";
pub const REVIEW_NOT_FOUND: &str = "Review not found";
pub const PROFILE_NOT_FOUND: &str = "Profile not found for this user";

pub const USER_EXISTS: &str = "User with this email or username already exists";
pub const USER_FIELDS_TAKEN: &str = "Email or username already exists";
pub const COURSE_TITLE_TAKEN: &str = "Course with this title already exists";
pub const PROFILE_EXISTS: &str = "Profile already exists for this user";
pub const ALREADY_ENROLLED: &str = "User is already enrolled in this course";
pub const ALREADY_REVIEWED: &str = "User has already reviewed this course";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by entity operations.
///
/// `NotFound` and `Conflict` carry the caller-facing message; `Database` wraps anything
/// the store itself reported.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Converts a write error into `Conflict(message)` when it is a unique-index violation.
    ///
    /// The unique indexes are the authoritative guard, so a write that loses the race
    /// against a concurrent insert reports the same conflict as the pre-check would have.
    pub fn from_write(err: DbErr, message: &str) -> Self {
        if is_unique_violation(&err) {
            StoreError::Conflict(message.to_owned())
        } else {
            StoreError::Database(err)
        }
    }
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
