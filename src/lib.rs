//! # Account Gateway
//!
//! 사용자 계정 서비스 앞단의 HTTP 요청 경계입니다.
//! 경로 파라미터와 JSON 본문을 검증된 커맨드로 변환하고,
//! 서비스 디스패치 결과를 단일 형태의 응답 봉투로 직렬화합니다.
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! HTTP Request
//!     │
//!     ▼
//! routes ──▶ handlers ──▶ domain::commands (경로 검증 → 본문 디코딩 → 커맨드)
//!                              │
//!                              ▼
//!                     services::users::UserService (디스패치 경계)
//!                              │
//!                              ▼
//!                     domain::dto::encode_response (응답 봉투)
//! ```
//!
//! ## 모듈 구성
//!
//! - [`core`] - 에러 타입과 에러 분류
//! - [`config`] - 환경 변수 기반 설정
//! - [`domain`] - 선택 필드 코덱, 경로 파라미터, 커맨드, 엔티티, DTO
//! - [`services`] - 디스패치 트레이트와 인메모리 참조 구현
//! - [`handlers`] - actix-web 핸들러
//! - [`routes`] - 라우트 등록

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod handlers;
pub mod routes;
