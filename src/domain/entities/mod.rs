//! # Domain Entities Module
//!
//! 참조 계정 서비스가 보관하는 엔티티를 정의합니다.
//! 요청 경계(커맨드 빌더)는 엔티티에 의존하지 않으며,
//! [`InMemoryUserService`](crate::services::users::InMemoryUserService)만 사용합니다.
//!
//! ```text
//! Domain Layer
//! ├── fields/      ← 3상태 선택 필드 코덱
//! ├── params/      ← 경로 파라미터
//! ├── commands/    ← 검증된 커맨드
//! ├── entities/    ← 이 모듈 (서비스 내부 상태)
//! └── dto/         ← 요청 본문, 응답 봉투
//! ```

pub mod users;
