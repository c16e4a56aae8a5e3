//! # Password Configuration Module
//!
//! 비밀번호 해싱 강도, 최소 길이, 재설정 토큰 유효 시간을 관리합니다.
//!
//! ```rust,ignore
//! use crate::config::{PasswordConfig, ResetTokenConfig};
//!
//! let cost = PasswordConfig::bcrypt_cost();
//! let ttl = ResetTokenConfig::ttl();
//! ```

use std::env;

use chrono::Duration;

use super::{parse_bounded, Environment};

/// 패스워드 해싱 및 정책 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 사용하는 최대 입력 길이 (bytes)
    pub const MAX_BYTES: usize = 72;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    /// 원시 설정값과 환경에서 bcrypt cost를 계산합니다.
    pub fn bcrypt_cost_from(raw: Option<&str>, env: &Environment) -> u32 {
        parse_bounded(raw, 4, 15, Self::bcrypt_cost_for_env(env))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    /// 새 비밀번호의 최소 길이 (`PASSWORD_MIN_LENGTH`, 기본값: 8)
    pub fn min_length() -> usize {
        parse_bounded(env::var("PASSWORD_MIN_LENGTH").ok().as_deref(), 1, Self::MAX_BYTES, 8)
    }
}

/// 비밀번호 재설정 토큰 설정
pub struct ResetTokenConfig;

impl ResetTokenConfig {
    /// 토큰 유효 시간(분) (`RESET_TOKEN_TTL_MINUTES`, 기본값: 30, 최대 1일)
    pub fn ttl_minutes() -> i64 {
        Self::ttl_minutes_from(env::var("RESET_TOKEN_TTL_MINUTES").ok().as_deref())
    }

    pub fn ttl_minutes_from(raw: Option<&str>) -> i64 {
        parse_bounded(raw, 1, 24 * 60, 30)
    }

    /// 토큰 유효 시간
    pub fn ttl() -> Duration {
        Duration::minutes(Self::ttl_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_bcrypt_cost_override() {
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("6"), &Environment::Production), 6);
        // 범위를 벗어나면 환경 기본값
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("3"), &Environment::Production), 12);
        assert_eq!(PasswordConfig::bcrypt_cost_from(Some("16"), &Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_from(None, &Environment::Test), 4);
    }

    #[test]
    fn test_reset_token_ttl() {
        assert_eq!(ResetTokenConfig::ttl_minutes_from(None), 30);
        assert_eq!(ResetTokenConfig::ttl_minutes_from(Some("90")), 90);
        assert_eq!(ResetTokenConfig::ttl_minutes_from(Some("0")), 30);
        assert_eq!(ResetTokenConfig::ttl_minutes_from(Some("100000")), 30);
    }
}
