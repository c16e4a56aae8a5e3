//! # Response Encoder
//!
//! 엔드포인트나 결과 종류와 관계없이 단일 형태의 응답 봉투를 생성합니다.
//!
//! ## 봉투 형식
//!
//! ### 성공
//! ```json
//! {
//!   "success": true,
//!   "code": 200,
//!   "data": { "id": 42, "name": "john_doe", "email": "john@example.com", "...": "..." },
//!   "error": null,
//!   "timestamp": "2024-01-01T12:00:00+00:00"
//! }
//! ```
//!
//! ### 실패
//! ```json
//! {
//!   "success": false,
//!   "code": 400,
//!   "data": null,
//!   "error": { "kind": "invalid_request", "message": "Invalid request: invalid user id: \"abc\"" },
//!   "timestamp": "2024-01-01T12:00:00+00:00"
//! }
//! ```
//!
//! 상태 코드는 응답 변형([`ServiceReply`]) 또는 에러 분류에서만 결정되며
//! 엔드포인트별 분기는 없습니다. [`encode_response`]는 결과를 값으로 소비하므로
//! 한 요청에서 두 번 호출될 수 없습니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::core::errors::{AppError, AppResult, ErrorKind};
use crate::domain::dto::users::response::UserResponse;

/// 디스패치 성공 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceReply {
    /// 새 사용자 생성 (201 Created)
    Created(UserResponse),
    /// 사용자 조회/수정 결과 (200 OK)
    User(UserResponse),
    /// 사용자 삭제 (200 OK)
    Deleted { id: i64 },
    /// 비동기 후속 처리가 시작됨 (202 Accepted) - 재설정 토큰 발송 등
    Accepted { message: String },
    /// 본문이 필요 없는 완료 (200 OK) - 비밀번호 변경 등
    Done { message: String },
}

impl ServiceReply {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceReply::Created(_) => StatusCode::CREATED,
            ServiceReply::Accepted { .. } => StatusCode::ACCEPTED,
            ServiceReply::User(_) | ServiceReply::Deleted { .. } | ServiceReply::Done { .. } => StatusCode::OK,
        }
    }
}

/// 봉투의 에러 영역
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

/// 단일 응답 봉투
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub code: u16,
    pub data: Option<ServiceReply>,
    pub error: Option<ErrorBody>,
    pub timestamp: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiResponse {
    pub fn success(reply: ServiceReply) -> Self {
        let status = reply.status();
        Self {
            success: true,
            code: status.as_u16(),
            data: Some(reply),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
        }
    }

    /// 에러 봉투를 생성합니다. 5xx 에러의 상세 메시지는 서버 로그에만 남깁니다.
    pub fn failure(error: &AppError) -> Self {
        if error.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", error);
        } else {
            log::debug!("요청 거부 [{}]: {}", error.kind().as_str(), error);
        }

        let status = error.status();
        Self {
            success: false,
            code: status.as_u16(),
            data: None,
            error: Some(ErrorBody {
                kind: error.kind(),
                message: error.public_message(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn into_http_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

/// 디스패치 결과를 HTTP 응답으로 직렬화합니다.
pub fn encode_response(result: AppResult<ServiceReply>) -> HttpResponse {
    match result {
        Ok(reply) => ApiResponse::success(reply),
        Err(error) => ApiResponse::failure(&error),
    }
    .into_http_response()
}
