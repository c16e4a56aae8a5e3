//! # Application Error Handling System
//!
//! 요청 디코딩 경계와 계정 서비스가 공유하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 어떤 경로로 핸들러를 빠져나가든 동일한 응답 봉투로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | ErrorKind | HTTP Status | 발생 위치 |
//! |----------|-----------|-------------|-----------|
//! | `InvalidRequest` | `invalid_request` | 400 Bad Request | 경로 파라미터, 빈 PATCH |
//! | `InvalidBody` | `invalid_body` | 400 Bad Request | 요청 본문 디코딩 |
//! | `PayloadTooLarge` | `payload_too_large` | 413 Payload Too Large | 본문 크기 제한 초과 |
//! | `ValidationError` | `validation_error` | 422 Unprocessable Entity | 서비스 입력 규칙 |
//! | `AuthenticationError` | `authentication_error` | 401 Unauthorized | 현재 비밀번호, 재설정 토큰 |
//! | `NotFound` | `not_found` | 404 Not Found | 존재하지 않는 사용자 |
//! | `ConflictError` | `conflict` | 409 Conflict | 이름/이메일 중복 |
//! | `InternalError` | `internal_error` | 500 Internal Server Error | 해싱 실패, 락 오염 |
//!
//! ## 디코딩 에러 전파
//!
//! 본문 파싱 실패는 재분류하지 않습니다. `serde_json::Error`가 그대로
//! `InvalidBody`의 source로 보존되어 진단 정보(줄/열 위치 등)를 잃지 않습니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppResult;
//!
//! fn decode(bytes: &[u8]) -> AppResult<serde_json::Value> {
//!     // serde_json::Error → AppError::InvalidBody 자동 변환
//!     Ok(serde_json::from_slice(bytes)?)
//! }
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 응답 봉투에 노출되는 에러 분류 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRequest,
    InvalidBody,
    PayloadTooLarge,
    ValidationError,
    AuthenticationError,
    NotFound,
    Conflict,
    InternalError,
}

impl ErrorKind {
    /// 직렬화 형식과 동일한 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::InvalidBody => "invalid_body",
            ErrorKind::PayloadTooLarge => "payload_too_large",
            ErrorKind::ValidationError => "validation_error",
            ErrorKind::AuthenticationError => "authentication_error",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::InternalError => "internal_error",
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 요청 경계(경로 파라미터 추출, 본문 디코딩, 커맨드 빌드)와
/// 디스패치 경계 너머의 계정 서비스에서 발생하는 모든 실패를 포괄합니다.
///
/// 경계 계층은 `InvalidRequest`, `InvalidBody`, `PayloadTooLarge`만 생성합니다.
/// 나머지 변형은 [`UserService`](crate::services::users::UserService) 구현이 반환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청
    ///
    /// 식별자가 숫자가 아니거나, 양수가 필요한 엔드포인트에서 0 이하이거나,
    /// 변경할 필드가 하나도 없는 PATCH 요청일 때 발생합니다.
    /// 재시도 대상이 아닌 클라이언트 에러입니다.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 요청 본문 디코딩 실패
    ///
    /// JSON 문법 오류, 객체가 아닌 최상위 값, 빈 본문, 필드 타입 불일치 등.
    /// 원본 `serde_json::Error`를 그대로 보존합니다.
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// 요청 본문이 `JSON_PAYLOAD_LIMIT`보다 큼
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// 서비스 수준 입력값 검증 실패 (필수 필드 누락, 이메일 형식 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패
    ///
    /// 현재 비밀번호 불일치, 유효하지 않거나 만료된 재설정 토큰.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이름 또는 이메일 중복
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    ///
    /// 상세 메시지는 서버 로그에만 남기고 클라이언트에는 일반 메시지를 반환합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 분류 코드
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            AppError::InvalidBody(_) => ErrorKind::InvalidBody,
            AppError::PayloadTooLarge(_) => ErrorKind::PayloadTooLarge,
            AppError::ValidationError(_) => ErrorKind::ValidationError,
            AppError::AuthenticationError(_) => ErrorKind::AuthenticationError,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::InternalError(_) => ErrorKind::InternalError,
        }
    }

    /// 에러 분류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidRequest | ErrorKind::InvalidBody => StatusCode::BAD_REQUEST,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::AuthenticationError => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 노출해도 안전한 메시지
    ///
    /// 5xx 에러는 내부 정보를 숨기고 고정 문구를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InternalError(_) => "서버 내부 오류가 발생했습니다".to_string(),
            other => other.to_string(),
        }
    }

    /// 5xx 여부
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// 핸들러 밖으로 전파된 에러도 동일한 응답 봉투를 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        crate::domain::dto::response::ApiResponse::failure(self).into_http_response()
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hashed = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
