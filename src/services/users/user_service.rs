//! # 사용자 서비스 디스패치 경계
//!
//! 요청 경계에서 검증된 커맨드를 받아 [`ServiceReply`] 또는 [`AppError`]를 돌려줍니다.
//! 핸들러는 이 트레이트에만 의존하므로 저장소 구현을 자유롭게 교체할 수 있습니다.
//!
//! ```text
//! HTTP Handler ──build──▶ Command ──dispatch──▶ UserService ──▶ AppResult<ServiceReply>
//!                                                                      │
//!                                                                      ▼
//!                                                            encode_response (봉투)
//! ```
//!
//! [`AppError`]: crate::core::errors::AppError

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::commands::{
    CreatePasswordCommand, CreateUserCommand, DeleteUserCommand, GetUserCommand,
    PatchUserCommand, ResetPasswordCommand, UpdatePasswordCommand, UpdateUserCommand,
};
use crate::domain::dto::ServiceReply;

/// 사용자 계정 커맨드 디스패치 트레이트
///
/// 모든 메서드는 커맨드를 값으로 받습니다. 커맨드는 이미 요청 경계에서
/// 구조 검증을 통과했으므로, 구현체는 비즈니스 규칙(존재 여부, 중복, 자격 증명)만 판단합니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// 신규 사용자 생성 → `ServiceReply::Created`
    async fn create_user(&self, command: CreateUserCommand) -> AppResult<ServiceReply>;

    /// 사용자 전체 교체 → `ServiceReply::User`
    async fn update_user(&self, command: UpdateUserCommand) -> AppResult<ServiceReply>;

    /// 제공된 필드만 부분 수정 → `ServiceReply::User`
    async fn patch_user(&self, command: PatchUserCommand) -> AppResult<ServiceReply>;

    /// 사용자 삭제 → `ServiceReply::Deleted`
    async fn delete_user(&self, command: DeleteUserCommand) -> AppResult<ServiceReply>;

    /// 사용자 조회 → `ServiceReply::User`
    async fn get_user(&self, command: GetUserCommand) -> AppResult<ServiceReply>;

    /// 비밀번호 재설정 요청 → `ServiceReply::Accepted`
    async fn reset_password(&self, command: ResetPasswordCommand) -> AppResult<ServiceReply>;

    /// 재설정 토큰으로 새 비밀번호 설정 → `ServiceReply::Done`
    async fn create_password(&self, command: CreatePasswordCommand) -> AppResult<ServiceReply>;

    /// 현재 비밀번호 확인 후 변경 → `ServiceReply::Done`
    async fn update_password(&self, command: UpdatePasswordCommand) -> AppResult<ServiceReply>;
}
