//! 재설정 토큰 전달 채널

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 평문 재설정 토큰을 사용자에게 전달하는 채널
///
/// 서비스는 토큰의 다이제스트만 보관하므로, 평문 토큰이 외부로 나가는 곳은 이 트레이트뿐입니다.
pub trait ResetTokenMailer: Send + Sync {
    fn deliver(&self, user: &User, token: &str) -> AppResult<()>;
}

/// 전달 대신 로그로 남기는 기본 메일러 (개발용)
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMailer;

impl ResetTokenMailer for LoggingMailer {
    fn deliver(&self, user: &User, token: &str) -> AppResult<()> {
        log::info!(
            "비밀번호 재설정 토큰 발송: user_id={}, email={}, token={}",
            user.id,
            user.email,
            token
        );
        Ok(())
    }
}
