//! API 라우트 설정 모듈
//!
//! 사용자 계정과 비밀번호 관련 엔드포인트, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 본문 필드 |
//! |--------|------|-----------|
//! | `POST` | `/users` | name, password, email |
//! | `PUT` | `/users/{id:\d+}` | name, password, email |
//! | `PATCH` | `/users/{id:\d+}` | name, password, email (1개 이상) |
//! | `DELETE` | `/users/{id:\d+}` | - |
//! | `GET` | `/users/{id:\d+}` | - |
//! | `GET` | `/password/reset` | name_or_email |
//! | `POST` | `/users/{id}/password` | token, new_password |
//! | `PUT` | `/users/{id}/password` | password, new_password |
//! | `GET` | `/health` | - |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//!
//! let service: Arc<dyn UserService> = Arc::new(InMemoryUserService::from_env());
//! let app = App::new()
//!     .app_data(web::Data::from(service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_password_routes(cfg);
}

/// 사용자 CRUD 라우트
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        .service(handlers::users::update_user)
        .service(handlers::users::patch_user)
        .service(handlers::users::delete_user)
        .service(handlers::users::get_user);
}

/// 비밀번호 재설정/변경 라우트
fn configure_password_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::passwords::reset_password)
        .service(handlers::passwords::create_password)
        .service(handlers::passwords::update_password);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_gateway",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::Duration;
    use serde_json::Value;

    use super::*;
    use crate::config::PayloadConfig;
    use crate::domain::params::UserId;
    use crate::services::users::mailer::testing::RecordingMailer;
    use crate::services::users::{InMemoryUserService, UserService, UserServiceSettings};

    fn test_service() -> (Arc<dyn UserService>, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let settings = UserServiceSettings {
            bcrypt_cost: 4,
            password_min_length: 8,
            reset_token_ttl: Duration::minutes(30),
        };
        let service: Arc<dyn UserService> =
            Arc::new(InMemoryUserService::new(settings, mailer.clone()));
        (service, mailer)
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($service))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    /// 요청을 보내고 상태 코드와 JSON 본문을 돌려줍니다.
    macro_rules! send {
        ($app:expr, $request:expr) => {{
            let response = test::call_service(&$app, $request.to_request()).await;
            let status = response.status();
            let body = test::read_body(response).await;
            let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
            (status, json)
        }};
    }

    const ALICE: &str = r#"{"name":"alice","email":"alice@example.com","password":"password123"}"#;

    #[actix_web::test]
    async fn test_health_check() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(app, test::TestRequest::get().uri("/health"));

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_create_user_returns_created_envelope() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) =
            send!(app, test::TestRequest::post().uri("/users").set_payload(ALICE));

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["code"], 201);
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["name"], "alice");
        assert!(json["data"].get("password").is_none());
        assert!(json["error"].is_null());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_invalid_body() {
        let (service, _) = test_service();
        let app = app!(service);

        for payload in ["{", "[1,2]", "", r#"{"name":5}"#] {
            let (status, json) =
                send!(app, test::TestRequest::post().uri("/users").set_payload(payload));

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
            assert_eq!(json["success"], false);
            assert_eq!(json["error"]["kind"], "invalid_body");
        }
    }

    #[actix_web::test]
    async fn test_oversized_body_uses_envelope() {
        let (service, _) = test_service();
        let app = app!(service);
        let name = "a".repeat(PayloadConfig::DEFAULT_LIMIT + 1);
        let payload = format!(
            r#"{{"name":"{}","email":"big@example.com","password":"password123"}}"#,
            name
        );

        let (status, json) =
            send!(app, test::TestRequest::post().uri("/users").set_payload(payload));

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 413);
        assert_eq!(json["error"]["kind"], "payload_too_large");
        assert!(json["data"].is_null());
    }

    #[actix_web::test]
    async fn test_oversized_body_on_password_route_uses_envelope() {
        let (service, _) = test_service();
        let app = app!(service);
        let token = "t".repeat(PayloadConfig::DEFAULT_LIMIT * 2);
        let payload = format!(r#"{{"token":"{}","new_password":"longenough"}}"#, token);

        let (status, json) = send!(
            app,
            test::TestRequest::post()
                .uri("/users/1/password")
                .set_payload(payload)
        );

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["code"], 413);
        assert_eq!(json["error"]["kind"], "payload_too_large");
    }

    #[actix_web::test]
    async fn test_patch_with_single_field() {
        let (service, _) = test_service();
        let app = app!(service);
        send!(app, test::TestRequest::post().uri("/users").set_payload(ALICE));

        let (status, json) = send!(
            app,
            test::TestRequest::patch()
                .uri("/users/1")
                .set_payload(r#"{"email":"a@b.com"}"#)
        );

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["email"], "a@b.com");
        assert_eq!(json["data"]["name"], "alice");
    }

    #[actix_web::test]
    async fn test_patch_without_fields_is_invalid_request() {
        let (service, _) = test_service();
        let app = app!(service);

        for payload in ["{}", r#"{"name":null}"#] {
            let (status, json) =
                send!(app, test::TestRequest::patch().uri("/users/42").set_payload(payload));

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"]["kind"], "invalid_request");
        }
    }

    #[actix_web::test]
    async fn test_patch_with_unknown_key_is_invalid_body() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(
            app,
            test::TestRequest::patch()
                .uri("/users/42")
                .set_payload(r#"{"nickname":"al"}"#)
        );

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "invalid_body");
    }

    #[actix_web::test]
    async fn test_delete_zero_id_is_invalid_request() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(app, test::TestRequest::delete().uri("/users/0"));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "invalid_request");
    }

    #[actix_web::test]
    async fn test_get_zero_id_reaches_service() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(app, test::TestRequest::get().uri("/users/0"));

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["kind"], "not_found");
    }

    #[actix_web::test]
    async fn test_non_digit_user_path_is_not_routed() {
        let (service, _) = test_service();
        let app = app!(service);

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/users/abc").to_request()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_get_and_delete_user() {
        let (service, _) = test_service();
        let app = app!(service);
        send!(app, test::TestRequest::post().uri("/users").set_payload(ALICE));

        let (status, json) = send!(app, test::TestRequest::get().uri("/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["email"], "alice@example.com");

        let (status, json) = send!(app, test::TestRequest::delete().uri("/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], 1);

        let (status, _) = send!(app, test::TestRequest::get().uri("/users/1"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_password_for_unknown_user() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(
            app,
            test::TestRequest::post()
                .uri("/users/7/password")
                .set_payload(r#"{"token":"abc","new_password":"longenough"}"#)
        );

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["kind"], "not_found");
    }

    #[actix_web::test]
    async fn test_password_path_with_non_integer_id() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(
            app,
            test::TestRequest::post()
                .uri("/users/abc/password")
                .set_payload(r#"{"token":"abc","new_password":"longenough"}"#)
        );

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "invalid_request");
    }

    #[actix_web::test]
    async fn test_reset_then_create_password_flow() {
        let (service, mailer) = test_service();
        let app = app!(service);
        send!(app, test::TestRequest::post().uri("/users").set_payload(ALICE));

        let (status, json) = send!(
            app,
            test::TestRequest::get()
                .uri("/password/reset")
                .set_payload(r#"{"name_or_email":"alice@example.com"}"#)
        );
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(json["code"], 202);

        let token = mailer.last_token_for(UserId::new(1)).unwrap();
        let payload = format!(r#"{{"token":"{}","new_password":"resetpass1"}}"#, token);
        let (status, json) = send!(
            app,
            test::TestRequest::post()
                .uri("/users/1/password")
                .set_payload(payload)
        );

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
    }

    #[actix_web::test]
    async fn test_update_password_with_wrong_current() {
        let (service, _) = test_service();
        let app = app!(service);
        send!(app, test::TestRequest::post().uri("/users").set_payload(ALICE));

        let (status, json) = send!(
            app,
            test::TestRequest::put()
                .uri("/users/1/password")
                .set_payload(r#"{"password":"wrongpass","new_password":"newpassword1"}"#)
        );

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["kind"], "authentication_error");

        let (status, _) = send!(
            app,
            test::TestRequest::put()
                .uri("/users/1/password")
                .set_payload(r#"{"password":"password123","new_password":"newpassword1"}"#)
        );

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_validation_error_status() {
        let (service, _) = test_service();
        let app = app!(service);

        let (status, json) = send!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_payload(r#"{"name":"alice","email":"bad","password":"password123"}"#)
        );

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["kind"], "validation_error");
    }
}
