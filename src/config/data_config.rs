//! 실행 환경 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 요청 본문 크기 제한을 관리합니다.

use std::env;

use super::parse_bounded;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값: 8080)
    pub fn port() -> u16 {
        parse_bounded(env::var("PORT").ok().as_deref(), 1, u16::MAX, 8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`SERVER_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        parse_bounded(env::var("SERVER_WORKERS").ok().as_deref(), 1, 256, 4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 본문 크기 제한 설정
///
/// 본문 디코딩은 동기적으로 수행되므로 크기 상한이 곧 요청당 파싱 비용의 상한입니다.
pub struct PayloadConfig;

impl PayloadConfig {
    /// 기본 최대 본문 크기 (16 KiB)
    pub const DEFAULT_LIMIT: usize = 16 * 1024;

    /// 최대 본문 크기 (`JSON_PAYLOAD_LIMIT`)
    pub fn json_limit() -> usize {
        Self::json_limit_from(env::var("JSON_PAYLOAD_LIMIT").ok().as_deref())
    }

    /// 원시 설정값에서 최대 본문 크기를 계산합니다. (256 bytes - 1 MiB)
    pub fn json_limit_from(raw: Option<&str>) -> usize {
        parse_bounded(raw, 256, 1024 * 1024, Self::DEFAULT_LIMIT)
    }
}
