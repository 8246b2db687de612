use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            email: value.email,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
