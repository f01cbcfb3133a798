use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EnrollRequest {
    #[serde(alias = "userId")]
    #[validate(range(min = 1, message = "User ID must be a positive integer"))]
    pub user_id: i64,
}
