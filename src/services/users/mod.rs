//! 사용자 관리 서비스 모듈
//!
//! 커맨드 디스패치 경계와 참조 구현을 제공합니다.
//!
//! - [`UserService`] - 커맨드 하나당 메서드 하나를 갖는 디스패치 트레이트
//! - [`InMemoryUserService`] - 프로세스 메모리에 계정을 보관하는 참조 구현
//! - [`ResetTokenMailer`] - 재설정 토큰 전달 채널
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이름/이메일 중복 방지
//! - 재설정 토큰은 SHA-256 다이제스트로만 보관

pub mod user_service;
pub mod in_memory;
pub mod mailer;

pub use user_service::UserService;
pub use in_memory::{InMemoryUserService, UserServiceSettings};
pub use mailer::{LoggingMailer, ResetTokenMailer};
