//! # Configuration Module
//!
//! 계정 서비스 경계의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 설정 구조체로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 요청 본문 크기 제한
//! - [`auth_config`] - 비밀번호 해싱 및 재설정 토큰 설정
//!
//! ## 설계 원칙
//!
//! - 모든 값은 기본값을 가지며, 잘못된 값은 경고 로그 후 기본값으로 대체됩니다.
//! - 파싱 로직은 `*_from` 형태의 순수 함수로 분리하여 환경 변수 없이 테스트합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 요청 본문 최대 크기 (bytes)
//! export JSON_PAYLOAD_LIMIT="16384"
//!
//! # 비밀번호 정책
//! export BCRYPT_COST="12"            # 4-15 범위
//! export PASSWORD_MIN_LENGTH="8"
//!
//! # 비밀번호 재설정 토큰 유효 시간 (분)
//! export RESET_TOKEN_TTL_MINUTES="30"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 정수형 환경 변수 값을 범위 검사와 함께 파싱합니다.
///
/// 값이 없거나, 파싱에 실패하거나, 범위를 벗어나면 `default`를 반환합니다.
pub(crate) fn parse_bounded<T>(raw: Option<&str>, min: T, max: T, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value >= min && value <= max => value,
        Ok(value) => {
            log::warn!("설정값 {}이(가) 허용 범위({}-{})를 벗어났습니다. 기본값 {} 사용", value, min, max, default);
            default
        }
        Err(_) => {
            log::warn!("설정값 '{}' 파싱 실패. 기본값 {} 사용", raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded() {
        assert_eq!(parse_bounded(None, 1u32, 10, 5), 5);
        assert_eq!(parse_bounded(Some("7"), 1u32, 10, 5), 7);
        assert_eq!(parse_bounded(Some(" 7 "), 1u32, 10, 5), 7);
        assert_eq!(parse_bounded(Some("11"), 1u32, 10, 5), 5);
        assert_eq!(parse_bounded(Some("abc"), 1u32, 10, 5), 5);
        assert_eq!(parse_bounded(Some("-1"), 1u32, 10, 5), 5);
    }
}
