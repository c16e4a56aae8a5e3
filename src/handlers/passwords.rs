//! # Password HTTP Handlers
//!
//! | 메서드 | 경로 | 커맨드 | 성공 상태 코드 |
//! |--------|------|--------|----------------|
//! | `GET` | `/password/reset` | [`ResetPasswordCommand`] | 202 Accepted |
//! | `POST` | `/users/{id}/password` | [`CreatePasswordCommand`] | 200 OK |
//! | `PUT` | `/users/{id}/password` | [`UpdatePasswordCommand`] | 200 OK |
//!
//! `/users/{id}/password`의 `{id}`는 라우터 제약이 없으므로 핸들러에서 정수 여부를 확인합니다.

use actix_web::{get, post, put, web, HttpResponse};

use crate::domain::commands::{CreatePasswordCommand, ResetPasswordCommand, UpdatePasswordCommand};
use super::read_body;
use crate::domain::dto::encode_response;
use crate::services::users::UserService;

/// 비밀번호 재설정 요청 핸들러
///
/// 계정 존재 여부와 관계없이 같은 응답을 돌려줍니다.
///
/// # Examples
///
/// ```bash
/// curl -X GET http://localhost:8080/password/reset \
///   -H "Content-Type: application/json" \
///   -d '{"name_or_email":"john@example.com"}'
/// ```
#[get("/password/reset")]
pub async fn reset_password(
    service: web::Data<dyn UserService>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = ResetPasswordCommand::build(&body)?;
            service.reset_password(command).await
        }
        .await,
    )
}

/// 재설정 토큰으로 새 비밀번호 설정
#[post("/users/{id}/password")]
pub async fn create_password(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = CreatePasswordCommand::build(&id, &body)?;
            service.create_password(command).await
        }
        .await,
    )
}

/// 현재 비밀번호 확인 후 변경
#[put("/users/{id}/password")]
pub async fn update_password(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = UpdatePasswordCommand::build(&id, &body)?;
            service.update_password(command).await
        }
        .await,
    )
}
