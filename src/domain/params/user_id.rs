//! 사용자 식별자 경로 파라미터
//!
//! `/users/{id}` 라우트는 라우터가 숫자 패턴(`\d+`)을 강제하지만,
//! `/users/{id}/password` 라우트는 임의의 세그먼트를 받으므로 파싱 단계가 유일한 검증입니다.
//!
//! ## 엔드포인트별 검증 수준
//!
//! | 엔드포인트 | 검증 |
//! |------------|------|
//! | PUT / PATCH / DELETE `/users/{id}` | [`UserId::parse_positive`] - 파싱 + `id >= 1` |
//! | GET `/users/{id}` | [`UserId::parse`] - 파싱만 |
//! | POST / PUT `/users/{id}/password` | [`UserId::parse`] - 파싱만 |

use std::fmt;

use serde::Serialize;

use crate::core::errors::{AppError, AppResult};

/// 10진수 64비트 정수 사용자 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// 경로 세그먼트를 10진수 `i64`로 파싱합니다. 부호 검사는 하지 않습니다.
    ///
    /// # Errors
    ///
    /// 파싱에 실패하면 `AppError::InvalidRequest`
    pub fn parse(raw: &str) -> AppResult<Self> {
        raw.parse::<i64>().map(Self).map_err(|e| {
            log::debug!("Invalid user id {:?}: {}", raw, e);
            AppError::InvalidRequest(format!("invalid user id: {:?}", raw))
        })
    }

    /// 파싱 후 식별자가 1 이상인지 확인합니다.
    ///
    /// # Errors
    ///
    /// 파싱 실패 또는 `id <= 0`이면 `AppError::InvalidRequest`
    pub fn parse_positive(raw: &str) -> AppResult<Self> {
        let id = Self::parse(raw)?;
        if !id.is_positive() {
            log::debug!("Non-positive user id {}", id);
            return Err(AppError::InvalidRequest(format!(
                "user id must be positive: {}",
                id
            )));
        }
        Ok(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    #[test]
    fn test_parse_accepts_any_integer() {
        assert_eq!(UserId::parse("42").unwrap().value(), 42);
        assert_eq!(UserId::parse("0").unwrap().value(), 0);
        assert_eq!(UserId::parse("-7").unwrap().value(), -7);
        assert_eq!(UserId::parse("+7").unwrap().value(), 7);
        assert_eq!(UserId::parse("007").unwrap().value(), 7);
        assert_eq!(UserId::parse("9223372036854775807").unwrap().value(), i64::MAX);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["", "abc", "1.5", "12a", " 12", "0x10", "9223372036854775808"] {
            let error = UserId::parse(raw).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidRequest, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(UserId::parse_positive("1").unwrap().value(), 1);

        for raw in ["0", "-1", "-9223372036854775808", "one"] {
            let error = UserId::parse_positive(raw).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidRequest, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserId::new(5)).unwrap(), "5");
    }
}
