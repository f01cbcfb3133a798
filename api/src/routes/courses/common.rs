use db::models::course::{CourseWithStudents, Model as CourseModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::users::common::UserSummary;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
}

/// Only the provided fields are updated.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
}

/// The `{id, title, description, instructor}` view of a course embedded in other resources.
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
}

impl From<CourseModel> for CourseSummary {
    fn from(course: CourseModel) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            instructor: course.instructor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub students: Vec<UserSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseWithStudents> for CourseResponse {
    fn from(CourseWithStudents { course, students }: CourseWithStudents) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            instructor: course.instructor,
            students: students.into_iter().map(UserSummary::from).collect(),
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}

impl From<CourseModel> for CourseResponse {
    fn from(course: CourseModel) -> Self {
        CourseWithStudents {
            course,
            students: Vec::new(),
        }
        .into()
    }
}
