//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # 요청 본문 (클라이언트 → 서버), 모든 필드 3상태
//! │   └── response/   # 사용자 표현 (민감 정보 제외)
//! └── response.rs     # 단일 응답 봉투와 Response Encoder
//! ```
//!
//! 엔티티와 DTO는 분리되어 있습니다. 비밀번호 해시나 재설정 토큰
//! 다이제스트는 어떤 응답 DTO에도 포함되지 않습니다.

pub mod users;
pub mod response;

pub use response::{encode_response, ApiResponse, ErrorBody, ServiceReply};
