//! 비밀번호 생명주기 커맨드
//!
//! 1. [`ResetPasswordCommand`] - 재설정 절차 시작 (비밀번호는 바뀌지 않음)
//! 2. [`CreatePasswordCommand`] - 발급된 토큰으로 새 비밀번호 설정
//! 3. [`UpdatePasswordCommand`] - 현재 비밀번호를 증명하고 변경
//!
//! 토큰 형식, 만료, 비밀번호 일치 여부는 계정 서비스가 검증합니다.
//! 이 계층은 필드를 문법적으로 추출할 수 있다는 것만 보장합니다.

use super::decode_request;
use crate::core::errors::AppResult;
use crate::domain::dto::users::request::{CreatePasswordBody, ResetPasswordBody, UpdatePasswordBody};
use crate::domain::fields::OptionalField;
use crate::domain::params::UserId;

/// `GET /password/reset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetPasswordCommand {
    pub name_or_email: OptionalField<String>,
}

impl ResetPasswordCommand {
    pub fn build(body: &[u8]) -> AppResult<Self> {
        let ResetPasswordBody { name_or_email } = decode_request(body, "ResetPasswordRequest")?;

        Ok(Self { name_or_email })
    }
}

/// `POST /users/{id}/password`
///
/// 식별자는 파싱 가능 여부만 검사합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePasswordCommand {
    pub id: UserId,
    pub token: OptionalField<String>,
    pub new_password: OptionalField<String>,
}

impl CreatePasswordCommand {
    pub fn build(raw_id: &str, body: &[u8]) -> AppResult<Self> {
        let id = UserId::parse(raw_id)?;
        let CreatePasswordBody { token, new_password } = decode_request(body, "CreatePasswordRequest")?;

        Ok(Self { id, token, new_password })
    }
}

/// `PUT /users/{id}/password`
///
/// 식별자는 파싱 가능 여부만 검사합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePasswordCommand {
    pub id: UserId,
    /// 현재 비밀번호
    pub password: OptionalField<String>,
    pub new_password: OptionalField<String>,
}

impl UpdatePasswordCommand {
    pub fn build(raw_id: &str, body: &[u8]) -> AppResult<Self> {
        let id = UserId::parse(raw_id)?;
        let UpdatePasswordBody { password, new_password } = decode_request(body, "UpdatePasswordRequest")?;

        Ok(Self { id, password, new_password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    fn value(s: &str) -> OptionalField<String> {
        OptionalField::Value(s.to_string())
    }

    #[test]
    fn test_reset_password_decodes_name_or_email() {
        let command = ResetPasswordCommand::build(br#"{"name_or_email": "a@b.com"}"#).unwrap();
        assert_eq!(command.name_or_email, value("a@b.com"));

        let command = ResetPasswordCommand::build(b"{}").unwrap();
        assert!(command.name_or_email.is_absent());
    }

    #[test]
    fn test_reset_password_requires_a_body() {
        let error = ResetPasswordCommand::build(b"").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidBody);
    }

    #[test]
    fn test_create_password_scenario() {
        let command =
            CreatePasswordCommand::build("7", br#"{"token": "abc", "new_password": "x"}"#).unwrap();

        assert_eq!(
            command,
            CreatePasswordCommand {
                id: UserId::new(7),
                token: value("abc"),
                new_password: value("x"),
            }
        );
    }

    #[test]
    fn test_create_password_does_not_check_sign() {
        let command = CreatePasswordCommand::build("0", b"{}").unwrap();
        assert_eq!(command.id, UserId::new(0));

        let command = CreatePasswordCommand::build("-12", br#"{"token": null}"#).unwrap();
        assert_eq!(command.id, UserId::new(-12));
        assert!(command.token.is_null());
    }

    #[test]
    fn test_create_password_rejects_unparseable_segment() {
        for raw in ["me", "", "7.0"] {
            let error = CreatePasswordCommand::build(raw, br#"{"token": "t"}"#).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidRequest, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_update_password_fields() {
        let command =
            UpdatePasswordCommand::build("3", br#"{"password": "old", "new_password": "new"}"#).unwrap();

        assert_eq!(command.id, UserId::new(3));
        assert_eq!(command.password, value("old"));
        assert_eq!(command.new_password, value("new"));
    }

    #[test]
    fn test_update_password_does_not_check_sign() {
        assert_eq!(UpdatePasswordCommand::build("-1", b"{}").unwrap().id, UserId::new(-1));
        assert_eq!(
            UpdatePasswordCommand::build("abc", b"{}").unwrap_err().kind(),
            ErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_update_password_propagates_decode_error() {
        let error = UpdatePasswordCommand::build("3", br#"{"password": 1234}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidBody);
    }
}
