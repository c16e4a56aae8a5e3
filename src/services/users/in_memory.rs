//! # 인메모리 사용자 서비스
//!
//! [`UserService`]의 참조 구현입니다. 계정과 재설정 토큰을 프로세스 메모리에 보관합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Command ─▶ 필드 검증 ─▶ 비밀번호 해싱 (잠금 밖) ─▶ write lock ─▶ 중복 검사 ─▶ 반영
//! ```
//!
//! bcrypt 해싱은 비용이 크므로 잠금을 잡기 전에 끝내고,
//! 중복 검사와 반영은 같은 write lock 안에서 수행합니다.
//!
//! ## 보안
//!
//! - 비밀번호는 bcrypt 해시로만 저장 (cost는 [`PasswordConfig`]에서 결정)
//! - 재설정 토큰은 SHA-256 다이제스트와 만료 시각으로만 저장, 1회용
//! - 재설정 요청은 계정 존재 여부와 관계없이 같은 응답을 돌려줌
//!
//! [`PasswordConfig`]: crate::config::PasswordConfig

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use validator::ValidateEmail;

use crate::config::{PasswordConfig, ResetTokenConfig};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::commands::{
    CreatePasswordCommand, CreateUserCommand, DeleteUserCommand, GetUserCommand, PatchField,
    PatchUserCommand, ResetPasswordCommand, UpdatePasswordCommand, UpdateUserCommand,
};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::dto::ServiceReply;
use crate::domain::entities::users::{PasswordResetToken, User};
use crate::domain::fields::OptionalField;
use crate::domain::params::UserId;
use crate::services::users::{LoggingMailer, ResetTokenMailer, UserService};

const RESET_ACCEPTED_MESSAGE: &str = "등록된 계정이라면 비밀번호 재설정 안내가 발송됩니다";
const PASSWORD_CREATED_MESSAGE: &str = "새 비밀번호가 설정되었습니다";
const PASSWORD_UPDATED_MESSAGE: &str = "비밀번호가 변경되었습니다";

/// 서비스 동작 설정
#[derive(Debug, Clone)]
pub struct UserServiceSettings {
    pub bcrypt_cost: u32,
    pub password_min_length: usize,
    pub reset_token_ttl: Duration,
}

impl UserServiceSettings {
    /// 환경 변수 기반 설정
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            password_min_length: PasswordConfig::min_length(),
            reset_token_ttl: ResetTokenConfig::ttl(),
        }
    }
}

#[derive(Default)]
struct UserStore {
    users: BTreeMap<UserId, User>,
    reset_tokens: HashMap<UserId, PasswordResetToken>,
    last_id: i64,
}

impl UserStore {
    /// 삭제된 id는 재사용하지 않습니다.
    fn next_id(&mut self) -> UserId {
        self.last_id += 1;
        UserId::new(self.last_id)
    }

    fn user(&self, id: UserId) -> AppResult<&User> {
        self.users.get(&id).ok_or_else(user_not_found)
    }

    fn user_mut(&mut self, id: UserId) -> AppResult<&mut User> {
        self.users.get_mut(&id).ok_or_else(user_not_found)
    }

    fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.values().find(|user| user.name == name)
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.has_email(email))
    }

    /// 이름/이메일 중복 검사. `except`는 자기 자신을 제외할 때 사용합니다.
    fn ensure_unique(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        except: Option<UserId>,
    ) -> AppResult<()> {
        if let Some(name) = name {
            if self.find_by_name(name).is_some_and(|user| Some(user.id) != except) {
                return Err(AppError::ConflictError("이미 사용 중인 이름입니다".to_string()));
            }
        }

        if let Some(email) = email {
            if self.find_by_email(email).is_some_and(|user| Some(user.id) != except) {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        Ok(())
    }
}

/// 인메모리 [`UserService`] 구현
pub struct InMemoryUserService {
    store: RwLock<UserStore>,
    settings: UserServiceSettings,
    mailer: Arc<dyn ResetTokenMailer>,
}

impl InMemoryUserService {
    pub fn new(settings: UserServiceSettings, mailer: Arc<dyn ResetTokenMailer>) -> Self {
        Self {
            store: RwLock::new(UserStore::default()),
            settings,
            mailer,
        }
    }

    /// 환경 설정과 [`LoggingMailer`]로 서비스를 생성합니다.
    pub fn from_env() -> Self {
        let settings = UserServiceSettings::from_env();
        log::info!(
            "사용자 서비스 설정: bcrypt_cost={}, password_min_length={}, reset_token_ttl={}분",
            settings.bcrypt_cost,
            settings.password_min_length,
            settings.reset_token_ttl.num_minutes()
        );
        Self::new(settings, Arc::new(LoggingMailer))
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, UserStore>> {
        self.store.read().context("사용자 저장소 읽기 잠금 실패")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, UserStore>> {
        self.store.write().context("사용자 저장소 쓰기 잠금 실패")
    }

    fn ensure_exists(&self, id: UserId) -> AppResult<()> {
        self.read()?.user(id).map(|_| ())
    }

    fn validate_password(&self, password: &str) -> AppResult<()> {
        let min = self.settings.password_min_length;
        if password.chars().count() < min {
            return Err(AppError::ValidationError(format!(
                "비밀번호는 최소 {}자 이상이어야 합니다",
                min
            )));
        }
        if password.len() > PasswordConfig::MAX_BYTES {
            return Err(AppError::ValidationError(format!(
                "비밀번호는 {}바이트를 넘을 수 없습니다",
                PasswordConfig::MAX_BYTES
            )));
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.settings.bcrypt_cost).context("비밀번호 해싱 실패")
    }

    /// 검증에 사용한 해시가 아직 저장된 해시일 때만 새 해시로 교체합니다.
    ///
    /// 검증과 해싱은 잠금 밖에서 이루어지므로, 그 사이 다른 요청이 비밀번호를
    /// 바꿨다면 검증 결과는 더 이상 유효하지 않습니다.
    fn replace_password_hash(
        &self,
        id: UserId,
        verified_hash: &str,
        password_hash: String,
    ) -> AppResult<()> {
        let mut store = self.write()?;
        let user = store.user_mut(id)?;
        if user.password_hash != verified_hash {
            log::debug!("비밀번호가 검증 이후 변경됨: user_id={}", id);
            return Err(current_password_mismatch());
        }

        user.password_hash = password_hash;
        user.touch();
        store.reset_tokens.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create_user(&self, command: CreateUserCommand) -> AppResult<ServiceReply> {
        let name = required_text(command.name, "name")?;
        let email = normalize_email(&required_text(command.email, "email")?)?;
        let password = required_secret(command.password, "password")?;
        self.validate_password(&password)?;
        let password_hash = self.hash_password(&password)?;

        let mut store = self.write()?;
        store.ensure_unique(Some(&name), Some(&email), None)?;

        let id = store.next_id();
        let user = User::new(id, name, email, password_hash);
        let response = UserResponse::from(&user);
        store.users.insert(id, user);

        log::info!("사용자 생성 완료: id={}", id);
        Ok(ServiceReply::Created(response))
    }

    async fn update_user(&self, command: UpdateUserCommand) -> AppResult<ServiceReply> {
        let id = command.id;
        self.ensure_exists(id)?;

        let name = required_text(command.name, "name")?;
        let email = normalize_email(&required_text(command.email, "email")?)?;
        let password = required_secret(command.password, "password")?;
        self.validate_password(&password)?;
        let password_hash = self.hash_password(&password)?;

        let mut store = self.write()?;
        store.ensure_unique(Some(&name), Some(&email), Some(id))?;

        let user = store.user_mut(id)?;
        user.name = name;
        user.email = email;
        user.password_hash = password_hash;
        user.touch();
        let response = UserResponse::from(&*user);

        log::info!("사용자 수정 완료: id={}", id);
        Ok(ServiceReply::User(response))
    }

    async fn patch_user(&self, command: PatchUserCommand) -> AppResult<ServiceReply> {
        let (id, fields) = command.into_parts();
        self.ensure_exists(id)?;

        let changed: Vec<&'static str> = fields.iter().map(|(field, _)| field.as_str()).collect();
        let mut name = None;
        let mut email = None;
        let mut password_hash = None;

        for (field, value) in fields {
            match field {
                PatchField::Name => name = Some(non_blank(&value, "name")?),
                PatchField::Email => email = Some(normalize_email(&non_blank(&value, "email")?)?),
                PatchField::Password => {
                    self.validate_password(&value)?;
                    password_hash = Some(self.hash_password(&value)?);
                }
            }
        }

        let mut store = self.write()?;
        store.ensure_unique(name.as_deref(), email.as_deref(), Some(id))?;

        let user = store.user_mut(id)?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(password_hash) = password_hash {
            user.password_hash = password_hash;
        }
        user.touch();
        let response = UserResponse::from(&*user);

        log::info!("사용자 부분 수정 완료: id={}, fields={:?}", id, changed);
        Ok(ServiceReply::User(response))
    }

    async fn delete_user(&self, command: DeleteUserCommand) -> AppResult<ServiceReply> {
        let id = command.id;
        let mut store = self.write()?;

        store.users.remove(&id).ok_or_else(user_not_found)?;
        store.reset_tokens.remove(&id);

        log::info!("사용자 삭제 완료: id={}", id);
        Ok(ServiceReply::Deleted { id: id.value() })
    }

    async fn get_user(&self, command: GetUserCommand) -> AppResult<ServiceReply> {
        let store = self.read()?;
        let user = store.user(command.id)?;

        Ok(ServiceReply::User(UserResponse::from(user)))
    }

    async fn reset_password(&self, command: ResetPasswordCommand) -> AppResult<ServiceReply> {
        let key = required_text(command.name_or_email, "name_or_email")?;

        let issued = {
            let mut store = self.write()?;
            // 이메일 형식의 이름도 허용되므로 이름으로 한 번 더 찾습니다.
            let found = if key.validate_email() {
                store.find_by_email(&key).or_else(|| store.find_by_name(&key))
            } else {
                store.find_by_name(&key)
            };
            let user = found.cloned();

            user.map(|user| {
                let (token, plaintext) =
                    PasswordResetToken::issue(self.settings.reset_token_ttl, Utc::now());
                store.reset_tokens.insert(user.id, token);
                (user, plaintext)
            })
        };

        match issued {
            Some((user, plaintext)) => match self.mailer.deliver(&user, &plaintext) {
                Ok(()) => log::info!("비밀번호 재설정 토큰 발급: user_id={}", user.id),
                Err(e) => log::error!("재설정 토큰 전달 실패: user_id={}, error={}", user.id, e),
            },
            None => log::debug!("비밀번호 재설정 대상 없음"),
        }

        Ok(ServiceReply::Accepted {
            message: RESET_ACCEPTED_MESSAGE.to_string(),
        })
    }

    async fn create_password(&self, command: CreatePasswordCommand) -> AppResult<ServiceReply> {
        let id = command.id;
        let token = required_secret(command.token, "token")?;
        let new_password = required_secret(command.new_password, "new_password")?;
        self.validate_password(&new_password)?;
        self.ensure_exists(id)?;

        let password_hash = self.hash_password(&new_password)?;

        let mut store = self.write()?;
        let now = Utc::now();
        let valid = store
            .reset_tokens
            .get(&id)
            .is_some_and(|issued| issued.verify(&token, now));
        if !valid {
            log::debug!("재설정 토큰 검증 실패: user_id={}", id);
            return Err(AppError::AuthenticationError(
                "유효하지 않거나 만료된 재설정 토큰입니다".to_string(),
            ));
        }
        store.reset_tokens.remove(&id);

        let user = store.user_mut(id)?;
        user.password_hash = password_hash;
        user.touch();

        log::info!("재설정 토큰으로 비밀번호 설정: user_id={}", id);
        Ok(ServiceReply::Done {
            message: PASSWORD_CREATED_MESSAGE.to_string(),
        })
    }

    async fn update_password(&self, command: UpdatePasswordCommand) -> AppResult<ServiceReply> {
        let id = command.id;
        let current = required_secret(command.password, "password")?;
        let new_password = required_secret(command.new_password, "new_password")?;
        self.validate_password(&new_password)?;

        let current_hash = self.read()?.user(id)?.password_hash.clone();
        let matches = bcrypt::verify(&current, &current_hash).context("비밀번호 검증 실패")?;
        if !matches {
            return Err(current_password_mismatch());
        }

        let password_hash = self.hash_password(&new_password)?;
        self.replace_password_hash(id, &current_hash, password_hash)?;

        log::info!("비밀번호 변경 완료: user_id={}", id);
        Ok(ServiceReply::Done {
            message: PASSWORD_UPDATED_MESSAGE.to_string(),
        })
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("사용자를 찾을 수 없습니다".to_string())
}

fn current_password_mismatch() -> AppError {
    AppError::AuthenticationError("현재 비밀번호가 일치하지 않습니다".to_string())
}

/// 공백을 제거한 값이 비어 있지 않아야 합니다.
fn non_blank(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} 필드는 비어 있을 수 없습니다", field)));
    }
    Ok(trimmed.to_string())
}

fn required_text(value: OptionalField<String>, field: &str) -> AppResult<String> {
    match value.into_option() {
        Some(value) => non_blank(&value, field),
        None => Err(AppError::ValidationError(format!("{} 필드는 필수입니다", field))),
    }
}

/// 비밀번호/토큰은 공백까지 그대로 보존합니다.
fn required_secret(value: OptionalField<String>, field: &str) -> AppResult<String> {
    match value.into_option() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::ValidationError(format!("{} 필드는 비어 있을 수 없습니다", field))),
        None => Err(AppError::ValidationError(format!("{} 필드는 필수입니다", field))),
    }
}

/// 형식을 검증하고 소문자로 저장합니다.
fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim();
    if !email.validate_email() {
        return Err(AppError::ValidationError("올바른 이메일 형식이 아닙니다".to_string()));
    }
    Ok(email.to_lowercase())
}
