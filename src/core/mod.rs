//! # Core Module
//!
//! 요청 경계 전체에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 디코딩, 커맨드 검증, 서비스 디스패치 단계의 모든 실패를 표현
//! - **ErrorKind**: 응답 봉투(envelope)에 실리는 안정적인 에러 분류 코드
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 일관된 에러 응답 보장
//!
//! ## 에러 흐름
//!
//! ```text
//! path segment ──► UserId::parse*  ──► AppError::InvalidRequest
//! request body ──► decode_body      ──► AppError::InvalidBody (serde_json 원본 에러 보존)
//! command      ──► UserService      ──► NotFound / ConflictError / AuthenticationError ...
//!                                         │
//!                                         ▼
//!                               encode_response (단일 봉투)
//! ```

pub mod errors;

pub use errors::*;
