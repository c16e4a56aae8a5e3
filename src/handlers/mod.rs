//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 커맨드로 변환하고 [`UserService`]로 디스패치하는 핸들러들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 경로/본문 → 커맨드        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Commands - 검증된 요청 값                     ← Domain Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 디스패치 경계                   ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 처리 순서
//!
//! 1. 본문 수신 (`JSON_PAYLOAD_LIMIT` 초과 시 `payload_too_large`)
//! 2. 경로 파라미터 검증 (실패 시 본문은 디코딩하지 않음)
//! 3. 본문 디코딩 → 커맨드 생성
//! 4. 서비스 디스패치
//! 5. [`encode_response`]로 단일 봉투 응답 생성
//!
//! 본문은 `web::Json`이 아닌 `web::Payload`로 받아 [`read_body`]로 모읍니다.
//! 필드의 부재와 `null`을 구분해야 하고, 크기 초과와 디코딩 실패도
//! 같은 봉투로 응답해야 하기 때문입니다.
//!
//! [`UserService`]: crate::services::users::UserService
//! [`encode_response`]: crate::domain::dto::encode_response

use actix_web::web;

use crate::config::PayloadConfig;
use crate::core::errors::{AppError, AppResult};

pub mod users;
pub mod passwords;

/// 요청 본문을 크기 제한 안에서 모두 읽습니다.
pub(crate) async fn read_body(payload: web::Payload) -> AppResult<web::Bytes> {
    let limit = PayloadConfig::json_limit();

    match payload.to_bytes_limited(limit).await {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => {
            log::debug!("Error reading request body: {}", e);
            Err(AppError::InvalidRequest(format!("request body could not be read: {}", e)))
        }
        Err(_) => Err(AppError::PayloadTooLarge(format!(
            "request body exceeds {} bytes",
            limit
        ))),
    }
}
