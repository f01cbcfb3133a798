use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder, Select};
use serde::Serialize;

use crate::error::{ALREADY_REVIEWED, REVIEW_NOT_FOUND, StoreError, StoreResult};
use crate::models::{course, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub course_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A review with its author. `user` is `None` once the author has been deleted.
#[derive(Clone, Debug)]
pub struct ReviewWithUser {
    pub review: Model,
    pub user: Option<user::Model>,
}

/// A review with both its author and its course resolved.
#[derive(Clone, Debug)]
pub struct ReviewWithUserAndCourse {
    pub review: Model,
    pub user: Option<user::Model>,
    pub course: Option<course::Model>,
}

impl Model {
    /// Adds a review by `user_id` to `course_id`.
    ///
    /// # Errors
    /// - `NotFound` if the course or the user does not exist (course is checked first).
    /// - `Conflict` if the user has already reviewed this course.
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        user_id: i64,
        rating: i32,
        comment: Option<String>,
    ) -> StoreResult<ReviewWithUser> {
        course::Model::get(db, course_id).await?;
        let user = user::Model::get(db, user_id).await?;

        let existing = Entity::find()
            .filter(
                Condition::all()
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(StoreError::Conflict(ALREADY_REVIEWED.into()));
        }

        let now = Utc::now();
        let review = ActiveModel {
            rating: Set(rating),
            comment: Set(comment),
            course_id: Set(course_id),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| StoreError::from_write(e, ALREADY_REVIEWED))?;

        Ok(ReviewWithUser {
            review,
            user: Some(user),
        })
    }

    /// Reviews of one course, newest first.
    pub async fn find_for_course(db: &DbConn, course_id: i64) -> StoreResult<Vec<ReviewWithUser>> {
        course::Model::get(db, course_id).await?;

        let reviews = newest_first(Entity::find().filter(Column::CourseId.eq(course_id)))
            .all(db)
            .await?;
        let users = users_by_id(db, reviews.iter().map(|r| r.user_id)).await?;

        Ok(reviews
            .into_iter()
            .map(|review| ReviewWithUser {
                user: users.get(&review.user_id).cloned(),
                review,
            })
            .collect())
    }

    /// Every review, newest first, with author and course resolved.
    pub async fn find_all_with_user_and_course(
        db: &DbConn,
    ) -> StoreResult<Vec<ReviewWithUserAndCourse>> {
        let reviews = newest_first(Entity::find()).all(db).await?;
        let users = users_by_id(db, reviews.iter().map(|r| r.user_id)).await?;
        let courses: HashMap<i64, course::Model> = course::Entity::find()
            .filter(course::Column::Id.is_in(reviews.iter().map(|r| r.course_id)))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| ReviewWithUserAndCourse {
                user: users.get(&review.user_id).cloned(),
                course: courses.get(&review.course_id).cloned(),
                review,
            })
            .collect())
    }

    /// Overwrites the provided fields of a review.
    pub async fn update(
        db: &DbConn,
        id: i64,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> StoreResult<ReviewWithUser> {
        let existing = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound(REVIEW_NOT_FOUND))?;

        let mut active: ActiveModel = existing.into();
        if let Some(rating) = rating {
            active.rating = Set(rating);
        }
        if comment.is_some() {
            active.comment = Set(comment);
        }
        active.updated_at = Set(Utc::now());
        let review = active.update(db).await?;

        let user = user::Entity::find_by_id(review.user_id).one(db).await?;
        Ok(ReviewWithUser { review, user })
    }

    pub async fn delete(db: &DbConn, id: i64) -> StoreResult<()> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(REVIEW_NOT_FOUND));
        }
        Ok(())
    }
}

/// Orders by creation time descending; ties fall back to insertion order, newest first.
fn newest_first(query: Select<Entity>) -> Select<Entity> {
    query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

async fn users_by_id(
    db: &DbConn,
    ids: impl Iterator<Item = i64>,
) -> StoreResult<HashMap<i64, user::Model>> {
    let ids: Vec<i64> = ids.collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(user::Entity::find()
        .filter(user::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect())
}
