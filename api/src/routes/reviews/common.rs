use db::models::review::{Model as ReviewModel, ReviewWithUser, ReviewWithUserAndCourse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::courses::common::CourseSummary;
use crate::routes::users::common::UserSummary;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(alias = "userId")]
    pub user_id: i64,
}

/// Only the provided fields are updated.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// How the reviewed course appears in a review: its id, or its summary when expanded.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReviewCourse {
    Id(i64),
    Summary(CourseSummary),
}

/// `user` and an expanded `course` are `null` when the referenced row no longer exists.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub course: Option<ReviewCourse>,
    pub user: Option<UserSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl ReviewResponse {
    fn build(review: ReviewModel, user: Option<UserSummary>, course: Option<ReviewCourse>) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            comment: review.comment,
            course,
            user,
            created_at: review.created_at.to_rfc3339(),
            updated_at: review.updated_at.to_rfc3339(),
        }
    }
}

impl From<ReviewWithUser> for ReviewResponse {
    fn from(ReviewWithUser { review, user }: ReviewWithUser) -> Self {
        let course = Some(ReviewCourse::Id(review.course_id));
        Self::build(review, user.map(UserSummary::from), course)
    }
}

impl From<ReviewWithUserAndCourse> for ReviewResponse {
    fn from(
        ReviewWithUserAndCourse {
            review,
            user,
            course,
        }: ReviewWithUserAndCourse,
    ) -> Self {
        let course = course.map(|c| ReviewCourse::Summary(c.into()));
        Self::build(review, user.map(UserSummary::from), course)
    }
}
