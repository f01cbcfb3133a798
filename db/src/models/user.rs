use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::Serialize;

use crate::error::{StoreError, StoreResult, USER_EXISTS, USER_FIELDS_TAKEN, USER_NOT_FOUND};
use crate::models::{course, enrollment};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique display name.
    #[sea_orm(unique)]
    pub username: String,
    /// User's unique email address.
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
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

/// Courses a user is enrolled in, reached through `enrollments`.
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollment::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollment::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A user together with the courses they are enrolled in, in enrollment order.
#[derive(Clone, Debug)]
pub struct UserWithCourses {
    pub user: Model,
    pub courses: Vec<course::Model>,
}

impl Model {
    /// Inserts a new user.
    ///
    /// # Errors
    /// - `Conflict` if another user already has the username or the email.
    pub async fn create(db: &DbConn, username: &str, email: &str) -> StoreResult<Model> {
        let taken = Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(email))
                    .add(Column::Username.eq(username)),
            )
            .one(db)
            .await?;
        if taken.is_some() {
            return Err(StoreError::Conflict(USER_EXISTS.into()));
        }

        let now = Utc::now();
        ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| StoreError::from_write(e, USER_EXISTS))
    }

    /// Looks up a user by ID, failing with `NotFound` when absent.
    pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> StoreResult<Model> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound(USER_NOT_FOUND))
    }

    pub async fn find_with_courses(db: &DbConn, id: i64) -> StoreResult<UserWithCourses> {
        let user = Self::get(db, id).await?;
        let mut courses = enrollment::Model::courses_for_users(db, &[user.id]).await?;
        Ok(UserWithCourses {
            courses: courses.remove(&user.id).unwrap_or_default(),
            user,
        })
    }

    /// Every user in creation order, each with their enrolled courses.
    pub async fn find_all_with_courses(db: &DbConn) -> StoreResult<Vec<UserWithCourses>> {
        let users = Entity::find().order_by_asc(Column::Id).all(db).await?;
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        let mut courses: HashMap<i64, Vec<course::Model>> =
            enrollment::Model::courses_for_users(db, &ids).await?;

        Ok(users
            .into_iter()
            .map(|user| UserWithCourses {
                courses: courses.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }

    /// Overwrites the provided fields of an existing user.
    ///
    /// # Errors
    /// - `NotFound` if the user does not exist.
    /// - `Conflict` if a provided username or email belongs to a different user.
    pub async fn update(
        db: &DbConn,
        id: i64,
        username: Option<String>,
        email: Option<String>,
    ) -> StoreResult<UserWithCourses> {
        let existing = Self::get(db, id).await?;

        if username.is_some() || email.is_some() {
            let mut clash = Condition::any();
            if let Some(username) = &username {
                clash = clash.add(Column::Username.eq(username.as_str()));
            }
            if let Some(email) = &email {
                clash = clash.add(Column::Email.eq(email.as_str()));
            }

            let other = Entity::find()
                .filter(Condition::all().add(Column::Id.ne(id)).add(clash))
                .one(db)
                .await?;
            if other.is_some() {
                return Err(StoreError::Conflict(USER_FIELDS_TAKEN.into()));
            }
        }

        let mut active: ActiveModel = existing.into();
        if let Some(username) = username {
            active.username = Set(username);
        }
        if let Some(email) = email {
            active.email = Set(email);
        }
        active.updated_at = Set(Utc::now());
        active
            .update(db)
            .await
            .map_err(|e| StoreError::from_write(e, USER_FIELDS_TAKEN))?;

        Self::find_with_courses(db, id).await
    }

    /// Removes the user row only. Profiles, reviews and enrollments are left in place.
    pub async fn delete(db: &DbConn, id: i64) -> StoreResult<()> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(USER_NOT_FOUND));
        }
        Ok(())
    }
}
