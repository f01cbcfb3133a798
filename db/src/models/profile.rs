use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::error::{PROFILE_EXISTS, PROFILE_NOT_FOUND, StoreError, StoreResult};
use crate::models::user;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user. At most one profile per user.
    #[sea_orm(unique)]
    pub user_id: i64,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A profile with its owning user.
#[derive(Clone, Debug)]
pub struct ProfileWithUser {
    pub profile: Model,
    pub user: user::Model,
}

impl Model {
    async fn find_by_user(db: &DbConn, user_id: i64) -> StoreResult<Option<Model>> {
        Ok(Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await?)
    }

    /// Creates the profile of `user_id`.
    ///
    /// # Errors
    /// - `NotFound` if the user does not exist.
    /// - `Conflict` if the user already has a profile.
    pub async fn create(
        db: &DbConn,
        user_id: i64,
        bio: Option<String>,
        website: Option<String>,
    ) -> StoreResult<ProfileWithUser> {
        let user = user::Model::get(db, user_id).await?;
        if Self::find_by_user(db, user_id).await?.is_some() {
            return Err(StoreError::Conflict(PROFILE_EXISTS.into()));
        }

        let now = Utc::now();
        let profile = ActiveModel {
            user_id: Set(user_id),
            bio: Set(bio),
            website: Set(website),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| StoreError::from_write(e, PROFILE_EXISTS))?;

        Ok(ProfileWithUser { profile, user })
    }

    pub async fn find_for_user(db: &DbConn, user_id: i64) -> StoreResult<ProfileWithUser> {
        let user = user::Model::get(db, user_id).await?;
        let profile = Self::find_by_user(db, user_id)
            .await?
            .ok_or(StoreError::NotFound(PROFILE_NOT_FOUND))?;
        Ok(ProfileWithUser { profile, user })
    }

    /// Overwrites the provided fields of the profile of `user_id`.
    pub async fn update_for_user(
        db: &DbConn,
        user_id: i64,
        bio: Option<String>,
        website: Option<String>,
    ) -> StoreResult<ProfileWithUser> {
        let ProfileWithUser { profile, user } = Self::find_for_user(db, user_id).await?;

        let mut active: ActiveModel = profile.into();
        if bio.is_some() {
            active.bio = Set(bio);
        }
        if website.is_some() {
            active.website = Set(website);
        }
        active.updated_at = Set(Utc::now());
        let profile = active.update(db).await?;

        Ok(ProfileWithUser { profile, user })
    }

    pub async fn delete_for_user(db: &DbConn, user_id: i64) -> StoreResult<()> {
        user::Model::get(db, user_id).await?;
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(PROFILE_NOT_FOUND));
        }
        Ok(())
    }
}
