//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 커맨드 | 성공 상태 코드 |
//! |--------|------|--------|----------------|
//! | `POST` | `/users` | [`CreateUserCommand`] | 201 Created |
//! | `PUT` | `/users/{id}` | [`UpdateUserCommand`] | 200 OK |
//! | `PATCH` | `/users/{id}` | [`PatchUserCommand`] | 200 OK |
//! | `DELETE` | `/users/{id}` | [`DeleteUserCommand`] | 200 OK |
//! | `GET` | `/users/{id}` | [`GetUserCommand`] | 200 OK |
//!
//! `{id}`는 라우터에서 숫자만 허용합니다. 숫자가 아닌 경로는 핸들러에 도달하지 않습니다.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};

use crate::domain::commands::{
    CreateUserCommand, DeleteUserCommand, GetUserCommand, PatchUserCommand, UpdateUserCommand,
};
use super::read_body;
use crate::domain::dto::encode_response;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"john_doe","email":"john@example.com","password":"password123"}'
/// ```
#[post("/users")]
pub async fn create_user(
    service: web::Data<dyn UserService>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = CreateUserCommand::build(&body)?;
            service.create_user(command).await
        }
        .await,
    )
}

/// 사용자 전체 수정 핸들러
#[put("/users/{id:\\d+}")]
pub async fn update_user(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = UpdateUserCommand::build(&id, &body)?;
            service.update_user(command).await
        }
        .await,
    )
}

/// 사용자 부분 수정 핸들러
///
/// 본문에 값이 있는 필드만 수정됩니다. `null`은 생략과 같게 취급하며,
/// 수정할 필드가 하나도 없으면 `invalid_request`로 거부됩니다.
///
/// # Examples
///
/// ```bash
/// curl -X PATCH http://localhost:8080/users/42 \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@b.com"}'
/// ```
#[patch("/users/{id:\\d+}")]
pub async fn patch_user(
    service: web::Data<dyn UserService>,
    id: web::Path<String>,
    payload: web::Payload,
) -> HttpResponse {
    encode_response(
        async {
            let body = read_body(payload).await?;
            let command = PatchUserCommand::build(&id, &body)?;
            service.patch_user(command).await
        }
        .await,
    )
}

/// 사용자 삭제 핸들러
#[delete("/users/{id:\\d+}")]
pub async fn delete_user(service: web::Data<dyn UserService>, id: web::Path<String>) -> HttpResponse {
    encode_response(
        async {
            let command = DeleteUserCommand::build(&id)?;
            service.delete_user(command).await
        }
        .await,
    )
}

/// 사용자 조회 핸들러
///
/// 조회는 id 형식만 확인합니다. `0`도 커맨드로 만들어지고, 존재 여부는 서비스가 판단합니다.
#[get("/users/{id:\\d+}")]
pub async fn get_user(service: web::Data<dyn UserService>, id: web::Path<String>) -> HttpResponse {
    encode_response(
        async {
            let command = GetUserCommand::build(&id)?;
            service.get_user(command).await
        }
        .await,
    )
}
