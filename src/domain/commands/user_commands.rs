//! 사용자 CRUD 커맨드

use std::fmt;

use super::decode_request;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{PatchUserBody, UserBody};
use crate::domain::fields::OptionalField;
use crate::domain::params::UserId;

/// `POST /users`
///
/// 필수 필드 검사는 하지 않습니다. 본문이 디코딩되면 항상 성공합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub name: OptionalField<String>,
    pub password: OptionalField<String>,
    pub email: OptionalField<String>,
}

impl CreateUserCommand {
    pub fn build(body: &[u8]) -> AppResult<Self> {
        let UserBody { name, password, email } = decode_request(body, "CreateUserRequest")?;

        Ok(Self { name, password, email })
    }
}

/// `PUT /users/{id}` - 전체 교체
///
/// 의미상 전체 교체지만 와이어 수준에서는 각 필드가 여전히 선택적입니다.
/// 최소 필드 수 규칙은 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub id: UserId,
    pub name: OptionalField<String>,
    pub password: OptionalField<String>,
    pub email: OptionalField<String>,
}

impl UpdateUserCommand {
    pub fn build(raw_id: &str, body: &[u8]) -> AppResult<Self> {
        let id = UserId::parse_positive(raw_id)?;
        let UserBody { name, password, email } = decode_request(body, "UpdateUserRequest")?;

        Ok(Self { id, name, password, email })
    }
}

/// PATCH로 변경할 수 있는 필드의 닫힌 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchField {
    Name,
    Password,
    Email,
}

impl PatchField {
    /// 본문 선언 순서
    pub const ALL: [PatchField; 3] = [PatchField::Name, PatchField::Password, PatchField::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatchField::Name => "name",
            PatchField::Password => "password",
            PatchField::Email => "email",
        }
    }
}

impl fmt::Display for PatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `PATCH /users/{id}` - 부분 수정
///
/// 본문에 값과 함께 명시된 필드만 담습니다. `null`은 "제공되지 않음"으로 취급합니다.
/// 생성된 커맨드는 항상 최소 한 개의 필드를 가집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchUserCommand {
    id: UserId,
    fields: Vec<(PatchField, String)>,
}

impl PatchUserCommand {
    pub fn build(raw_id: &str, body: &[u8]) -> AppResult<Self> {
        let id = UserId::parse_positive(raw_id)?;
        let PatchUserBody { name, password, email } = decode_request(body, "PatchUserRequest")?;

        let fields: Vec<(PatchField, String)> = [
            (PatchField::Name, name),
            (PatchField::Password, password),
            (PatchField::Email, email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.into_option().map(|value| (field, value)))
        .collect();

        Self::new(id, fields)
    }

    /// 이미 추출된 필드 목록으로 커맨드를 만듭니다.
    ///
    /// # Errors
    ///
    /// 필드가 비어 있거나 같은 필드가 두 번 나오면 `AppError::InvalidRequest`
    pub fn new(id: UserId, fields: Vec<(PatchField, String)>) -> AppResult<Self> {
        if fields.is_empty() {
            log::debug!("Empty patch for user {}", id);
            return Err(AppError::InvalidRequest(
                "patch must supply at least one of name, password, email".to_string(),
            ));
        }

        for (index, (field, _)) in fields.iter().enumerate() {
            if fields[..index].iter().any(|(seen, _)| seen == field) {
                return Err(AppError::InvalidRequest(format!("duplicate patch field: {}", field)));
            }
        }

        Ok(Self { id, fields })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// 변경할 필드와 새 값 (본문 선언 순서)
    pub fn fields(&self) -> &[(PatchField, String)] {
        &self.fields
    }

    pub fn get(&self, field: PatchField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, field: PatchField) -> bool {
        self.get(field).is_some()
    }

    pub fn into_parts(self) -> (UserId, Vec<(PatchField, String)>) {
        (self.id, self.fields)
    }
}

/// `DELETE /users/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUserCommand {
    pub id: UserId,
}

impl DeleteUserCommand {
    pub fn build(raw_id: &str) -> AppResult<Self> {
        Ok(Self { id: UserId::parse_positive(raw_id)? })
    }
}

/// `GET /users/{id}`
///
/// 파싱 가능 여부만 검사합니다. `0`이나 음수도 통과합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserCommand {
    pub id: UserId,
}

impl GetUserCommand {
    pub fn build(raw_id: &str) -> AppResult<Self> {
        Ok(Self { id: UserId::parse(raw_id)? })
    }
}
