use db::models::profile::ProfileWithUser;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::users::common::UserSummary;

/// Body of both `POST` and `PUT`. On update, omitted fields are kept.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(max = 2000, message = "Bio cannot exceed 2000 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 2048, message = "Website cannot exceed 2048 characters"))]
    pub website: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub user: UserSummary,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProfileWithUser> for ProfileResponse {
    fn from(ProfileWithUser { profile, user }: ProfileWithUser) -> Self {
        Self {
            id: profile.id,
            user: user.into(),
            bio: profile.bio,
            website: profile.website,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}
