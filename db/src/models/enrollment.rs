use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, TransactionTrait};
use serde::Serialize;

use crate::error::{ALREADY_ENROLLED, StoreError, StoreResult};
use crate::models::{course, user};

/// One row per (course, user) pair. Both "students of a course" and "courses of a
/// user" are read from this table, so the two views cannot disagree.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub enrolled_at: DateTime<Utc>,
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

impl Model {
    /// Enrolls `user_id` in `course_id`.
    ///
    /// The existence checks, the duplicate check and the insert run in one
    /// transaction; a failure at any step leaves no enrollment behind.
    ///
    /// # Errors
    /// - `NotFound` if the course or the user does not exist (course is checked first).
    /// - `Conflict` if the user is already enrolled.
    pub async fn enroll(db: &DbConn, course_id: i64, user_id: i64) -> StoreResult<Model> {
        let txn = db.begin().await?;

        course::Model::get(&txn, course_id).await?;
        user::Model::get(&txn, user_id).await?;

        if Entity::find_by_id((course_id, user_id))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(StoreError::Conflict(ALREADY_ENROLLED.into()));
        }

        let enrollment = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
            enrolled_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await
        .map_err(|e| StoreError::from_write(e, ALREADY_ENROLLED))?;

        txn.commit().await?;
        tracing::debug!(course_id, user_id, "User enrolled");
        Ok(enrollment)
    }

    /// Enrollments of the given users, ordered by enrollment time.
    async fn for_users<C: ConnectionTrait>(db: &C, user_ids: &[i64]) -> StoreResult<Vec<Model>> {
        Ok(Entity::find()
            .filter(Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(Column::EnrolledAt)
            .order_by_asc(Column::CourseId)
            .all(db)
            .await?)
    }

    /// Enrollments of the given courses, ordered by enrollment time.
    async fn for_courses<C: ConnectionTrait>(
        db: &C,
        course_ids: &[i64],
    ) -> StoreResult<Vec<Model>> {
        Ok(Entity::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(Column::EnrolledAt)
            .order_by_asc(Column::UserId)
            .all(db)
            .await?)
    }

    /// Resolves the enrolled courses of each user.
    ///
    /// Enrollments pointing at a deleted course are skipped rather than reported.
    pub async fn courses_for_users<C: ConnectionTrait>(
        db: &C,
        user_ids: &[i64],
    ) -> StoreResult<HashMap<i64, Vec<course::Model>>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Self::for_users(db, user_ids).await?;
        let courses: HashMap<i64, course::Model> = course::Entity::find()
            .filter(course::Column::Id.is_in(rows.iter().map(|r| r.course_id)))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut by_user: HashMap<i64, Vec<course::Model>> = HashMap::new();
        for row in rows {
            if let Some(course) = courses.get(&row.course_id) {
                by_user.entry(row.user_id).or_default().push(course.clone());
            }
        }
        Ok(by_user)
    }

    /// Resolves the enrolled students of each course.
    ///
    /// Enrollments pointing at a deleted user are skipped rather than reported.
    pub async fn students_for_courses<C: ConnectionTrait>(
        db: &C,
        course_ids: &[i64],
    ) -> StoreResult<HashMap<i64, Vec<user::Model>>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Self::for_courses(db, course_ids).await?;
        let users: HashMap<i64, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(rows.iter().map(|r| r.user_id)))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut by_course: HashMap<i64, Vec<user::Model>> = HashMap::new();
        for row in rows {
            if let Some(user) = users.get(&row.user_id) {
                by_course.entry(row.course_id).or_default().push(user.clone());
            }
        }
        Ok(by_course)
    }
}
