//! # Command Builders
//!
//! 경로 파라미터와 디코딩된 요청 본문을 검증된 도메인 커맨드로 조립합니다.
//! 엔드포인트마다 하나의 순수 함수(`build`)가 있으며, 성공 시 커맨드를,
//! 실패 시 분류된 [`AppError`](crate::core::errors::AppError)를 반환합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! raw id ──► UserId::parse / parse_positive ──┐
//!                                             ├──► Command
//! body   ──► decode_body::<Body>          ────┘
//! ```
//!
//! 식별자는 본문보다 먼저 검증됩니다. 잘못된 식별자로는 본문 파싱이 일어나지 않습니다.
//!
//! ## 커맨드 목록
//!
//! | 커맨드 | 식별자 검증 | 본문 규칙 |
//! |--------|-------------|-----------|
//! | [`CreateUserCommand`] | - | 디코딩만 |
//! | [`UpdateUserCommand`] | 양수 | 디코딩만 (전체 교체) |
//! | [`PatchUserCommand`] | 양수 | 값이 있는 필드 1개 이상 |
//! | [`DeleteUserCommand`] | 양수 | 본문 없음 |
//! | [`GetUserCommand`] | 파싱만 | 본문 없음 |
//! | [`ResetPasswordCommand`] | - | 디코딩만 |
//! | [`CreatePasswordCommand`] | 파싱만 | 디코딩만 |
//! | [`UpdatePasswordCommand`] | 파싱만 | 디코딩만 |
//!
//! 커맨드는 요청마다 새로 만들어지고, 값으로 한 번 디스패치된 뒤 버려집니다.

pub mod user_commands;
pub mod password_commands;

pub use user_commands::*;
pub use password_commands::*;

use serde::de::DeserializeOwned;

use crate::core::errors::AppResult;
use crate::domain::fields::decode_body;

/// 본문을 디코딩하고 실패를 debug 로그로 남깁니다.
fn decode_request<T>(body: &[u8], request: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    decode_body(body).inspect_err(|e| log::debug!("Error decoding {}: {}", request, e))
}
