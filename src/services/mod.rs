//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 요청 경계가 만든 커맨드는 [`users::UserService`] 트레이트를 통해 디스패치됩니다.
//! 핸들러는 구현체를 모르고 `web::Data<dyn UserService>`만 참조합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::services::users::{InMemoryUserService, UserService};
//!
//! let service: Arc<dyn UserService> = Arc::new(InMemoryUserService::from_env());
//! let data = web::Data::from(service);
//! ```

pub mod users;
