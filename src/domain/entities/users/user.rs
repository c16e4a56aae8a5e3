//! User Entity Implementation

use chrono::{DateTime, Utc};

use crate::domain::params::UserId;

/// 사용자 엔티티
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// 사용자 이름 (unique)
    pub name: String,
    /// 사용자 이메일 (unique, 대소문자 무시)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// 이메일 비교 (대소문자 무시)
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}
