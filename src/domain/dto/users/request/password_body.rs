//! 비밀번호 생명주기 요청 본문

use serde::Deserialize;

use crate::domain::fields::OptionalField;

/// `GET /password/reset` 요청 본문
///
/// 이름인지 이메일인지의 판단은 계정 서비스가 수행합니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResetPasswordBody {
    pub name_or_email: OptionalField<String>,
}

/// `POST /users/{id}/password` 요청 본문 (재설정 토큰 사용)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePasswordBody {
    pub token: OptionalField<String>,
    pub new_password: OptionalField<String>,
}

/// `PUT /users/{id}/password` 요청 본문 (현재 비밀번호로 변경)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePasswordBody {
    /// 현재 비밀번호
    pub password: OptionalField<String>,
    pub new_password: OptionalField<String>,
}
