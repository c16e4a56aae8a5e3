//! 요청 본문 디코더
//!
//! 원시 바이트를 먼저 `serde_json::Value`로 파싱하여 최상위가 객체인지 확인한 뒤,
//! 대상 본문 타입으로 변환합니다. serde는 구조체를 JSON 배열에서도 위치 기반으로
//! 역직렬화하므로, 객체 검사를 생략하면 `["a", "b"]` 같은 본문이 통과합니다.

use serde::de::{DeserializeOwned, Error as _};

use crate::core::errors::AppResult;

/// 요청 본문을 JSON 객체로 디코딩합니다.
///
/// # Errors
///
/// 다음 경우 모두 원본 `serde_json::Error`를 담은 `AppError::InvalidBody`를 반환합니다.
///
/// - 빈 본문 또는 JSON 문법 오류
/// - 최상위 값이 객체가 아님
/// - 필드 타입 불일치, 허용되지 않은 키 (`deny_unknown_fields` 본문)
pub fn decode_body<T>(bytes: &[u8]) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_slice(bytes)?;

    if !value.is_object() {
        return Err(serde_json::Error::custom(format!(
            "expected a JSON object body, found {}",
            json_type_name(&value)
        ))
        .into());
    }

    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
