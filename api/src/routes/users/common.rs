use db::models::user::{Model as UserModel, UserWithCourses};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::courses::common::CourseSummary;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
}

/// Only the provided fields are updated.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: Option<String>,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
}

/// The `{id, username, email}` view of a user embedded in other resources.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<UserModel> for UserSummary {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub courses: Vec<CourseSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserWithCourses> for UserResponse {
    fn from(UserWithCourses { user, courses }: UserWithCourses) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            courses: courses.into_iter().map(CourseSummary::from).collect(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// A freshly created user has no enrollments yet.
impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        UserWithCourses {
            user,
            courses: Vec::new(),
        }
        .into()
    }
}
