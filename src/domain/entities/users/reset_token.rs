//! 비밀번호 재설정 토큰
//!
//! 평문 토큰은 발급 시점에 한 번만 메일러로 전달되고,
//! 저장소에는 SHA-256 다이제스트와 만료 시각만 남습니다.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    digest: String,
    pub expires_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// 새 토큰을 발급합니다. 반환된 평문 토큰은 다시 복원할 수 없습니다.
    pub fn issue(ttl: Duration, now: DateTime<Utc>) -> (Self, String) {
        let plaintext = Uuid::new_v4().simple().to_string();
        let token = Self {
            digest: Self::digest_of(&plaintext),
            expires_at: now + ttl,
        };
        (token, plaintext)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// 평문 토큰이 일치하고 만료되지 않았는지 확인합니다.
    pub fn verify(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        !self.is_expired(now) && Self::digest_of(candidate) == self.digest
    }

    fn digest_of(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}
