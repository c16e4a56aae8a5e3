use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.value(),
            name: name.clone(),
            email: email.clone(),
            created_at: *created_at,
            updated_at: *updated_at,
        }
    }
}
