//! # Path-Parameter Extractor
//!
//! 라우트 경로에 포함된 숫자 식별자를 파싱하고 검증합니다.

pub mod user_id;

pub use user_id::UserId;
