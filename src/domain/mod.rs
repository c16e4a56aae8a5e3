//! # Domain Layer
//!
//! 요청 디코딩과 커맨드 검증의 핵심 계층입니다.
//!
//! ```text
//! inbound request
//!   │
//!   ├─► params::UserId          (Path-Parameter Extractor)
//!   ├─► fields::decode_body     (Optional-Field Codec)
//!   ├─► commands::*::build      (Command Builders)
//!   │
//!   ├─► services::UserService   (Dispatch Boundary)
//!   │
//!   └─► dto::encode_response    (Response Encoder)
//! ```

pub mod fields;
pub mod params;
pub mod commands;
pub mod entities;
pub mod dto;
