//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스 처리 결과를 클라이언트에게 전달하기 위한 사용자 표현입니다.
//! 비밀번호 해시 등 민감한 정보는 제외됩니다.
//!
//! ```json
//! {
//!   "id": 42,
//!   "name": "john_doe",
//!   "email": "john@example.com",
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "updated_at": "2024-01-01T08:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
