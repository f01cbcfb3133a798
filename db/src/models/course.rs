use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::Serialize;

use crate::error::{COURSE_NOT_FOUND, COURSE_TITLE_TAKEN, StoreError, StoreResult};
use crate::models::{enrollment, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

/// Students enrolled in a course, reached through `enrollments`.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollment::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollment::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A course together with its enrolled students, in enrollment order.
#[derive(Clone, Debug)]
pub struct CourseWithStudents {
    pub course: Model,
    pub students: Vec<user::Model>,
}

impl Model {
    /// Inserts a new course.
    ///
    /// # Errors
    /// - `Conflict` if another course already has the title.
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: Option<String>,
        instructor: Option<String>,
    ) -> StoreResult<Model> {
        let taken = Entity::find()
            .filter(Column::Title.eq(title))
            .one(db)
            .await?;
        if taken.is_some() {
            return Err(StoreError::Conflict(COURSE_TITLE_TAKEN.into()));
        }

        let now = Utc::now();
        ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description),
            instructor: Set(instructor),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| StoreError::from_write(e, COURSE_TITLE_TAKEN))
    }

    /// Looks up a course by ID, failing with `NotFound` when absent.
    pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> StoreResult<Model> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound(COURSE_NOT_FOUND))
    }

    pub async fn find_with_students(db: &DbConn, id: i64) -> StoreResult<CourseWithStudents> {
        let course = Self::get(db, id).await?;
        let mut students = enrollment::Model::students_for_courses(db, &[course.id]).await?;
        Ok(CourseWithStudents {
            students: students.remove(&course.id).unwrap_or_default(),
            course,
        })
    }

    /// Every course in creation order, each with its enrolled students.
    pub async fn find_all_with_students(db: &DbConn) -> StoreResult<Vec<CourseWithStudents>> {
        let courses = Entity::find().order_by_asc(Column::Id).all(db).await?;
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let mut students: HashMap<i64, Vec<user::Model>> =
            enrollment::Model::students_for_courses(db, &ids).await?;

        Ok(courses
            .into_iter()
            .map(|course| CourseWithStudents {
                students: students.remove(&course.id).unwrap_or_default(),
                course,
            })
            .collect())
    }

    /// Overwrites the provided fields of an existing course.
    ///
    /// # Errors
    /// - `NotFound` if the course does not exist.
    /// - `Conflict` if the new title belongs to a different course.
    pub async fn update(
        db: &DbConn,
        id: i64,
        title: Option<String>,
        description: Option<String>,
        instructor: Option<String>,
    ) -> StoreResult<CourseWithStudents> {
        let existing = Self::get(db, id).await?;

        if let Some(title) = &title {
            let other = Entity::find()
                .filter(
                    Condition::all()
                        .add(Column::Id.ne(id))
                        .add(Column::Title.eq(title.as_str())),
                )
                .one(db)
                .await?;
            if other.is_some() {
                return Err(StoreError::Conflict(COURSE_TITLE_TAKEN.into()));
            }
        }

        let mut active: ActiveModel = existing.into();
        if let Some(title) = title {
            active.title = Set(title);
        }
        if description.is_some() {
            active.description = Set(description);
        }
        if instructor.is_some() {
            active.instructor = Set(instructor);
        }
        active.updated_at = Set(Utc::now());
        active
            .update(db)
            .await
            .map_err(|e| StoreError::from_write(e, COURSE_TITLE_TAKEN))?;

        Self::find_with_students(db, id).await
    }

    /// Removes the course row only. Enrollments and reviews are left in place.
    pub async fn delete(db: &DbConn, id: i64) -> StoreResult<()> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(COURSE_NOT_FOUND));
        }
        Ok(())
    }
}
