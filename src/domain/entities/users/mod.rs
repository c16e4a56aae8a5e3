//! Users Entity Module
//!
//! - [`User`] - 사용자 계정 (비밀번호는 bcrypt 해시로만 보관)
//! - [`PasswordResetToken`] - 발급된 재설정 토큰 (SHA-256 다이제스트로만 보관)

pub mod user;
pub mod reset_token;

pub use user::User;
pub use reset_token::PasswordResetToken;
