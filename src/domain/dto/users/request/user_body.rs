//! 사용자 생성/수정 요청 본문

use serde::Deserialize;

use crate::domain::fields::OptionalField;

/// `POST /users`, `PUT /users/{id}` 요청 본문
///
/// ```json
/// {
///   "name": "john_doe",
///   "password": "SecurePass123",
///   "email": "john@example.com"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserBody {
    pub name: OptionalField<String>,
    pub password: OptionalField<String>,
    pub email: OptionalField<String>,
}

/// `PATCH /users/{id}` 요청 본문
///
/// 필드 구성은 [`UserBody`]와 같지만 인식되지 않는 키를 조용히 무시하지 않고
/// 디코딩 단계에서 거부합니다. 오타가 난 키(`"emial"`)가 "변경 없음"으로
/// 처리되는 것을 막습니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchUserBody {
    pub name: OptionalField<String>,
    pub password: OptionalField<String>,
    pub email: OptionalField<String>,
}
