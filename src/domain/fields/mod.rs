//! # Optional-Field Codec
//!
//! 모든 필드가 "없음 / null / 값" 세 가지 상태를 가질 수 있는 JSON 요청 본문을
//! 디코딩합니다.
//!
//! - [`optional_field`] - 필드 단위의 3상태 래퍼 [`OptionalField`]
//! - [`body`] - 원시 본문을 JSON 객체로 디코딩하는 [`decode_body`]
//!
//! ```rust,ignore
//! use crate::domain::fields::{decode_body, OptionalField};
//!
//! #[derive(Deserialize, Default)]
//! #[serde(default)]
//! struct Body {
//!     name: OptionalField<String>,
//! }
//!
//! let body: Body = decode_body(br#"{"name": null}"#)?;
//! assert!(body.name.is_null());
//! ```

pub mod optional_field;
pub mod body;

pub use optional_field::OptionalField;
pub use body::decode_body;
