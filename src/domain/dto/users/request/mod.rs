//! # 사용자 관련 요청 본문 DTO 모듈
//!
//! 사용자 및 비밀번호 엔드포인트의 JSON 요청 본문 구조를 정의합니다.
//! 모든 필드는 [`OptionalField`](crate::domain::fields::OptionalField)이며,
//! 필수 여부 판단은 이 계층이 아닌 계정 서비스의 몫입니다.
//!
//! | 본문 | 엔드포인트 | 필드 |
//! |------|------------|------|
//! | [`UserBody`] | `POST /users`, `PUT /users/{id}` | name, password, email |
//! | [`PatchUserBody`] | `PATCH /users/{id}` | name, password, email (알 수 없는 키 거부) |
//! | [`ResetPasswordBody`] | `GET /password/reset` | name_or_email |
//! | [`CreatePasswordBody`] | `POST /users/{id}/password` | token, new_password |
//! | [`UpdatePasswordBody`] | `PUT /users/{id}/password` | password, new_password |
//!
//! 모든 본문은 구조체 수준 `#[serde(default)]`를 사용하여 누락된 키를
//! `Absent`로 디코딩합니다.

pub mod user_body;
pub mod password_body;

pub use user_body::{PatchUserBody, UserBody};
pub use password_body::{CreatePasswordBody, ResetPasswordBody, UpdatePasswordBody};
