//! User registration for Postboard.

use thiserror::Error;
use tracing::info;

use crate::auth::validation::{validate_nickname, validate_user_id, ValidationError};
use crate::auth::{hash_password, PasswordError};
use crate::config::AdminConfig;
use crate::db::{DbPool, NewUser, Role, User, UserRepository};
use crate::BoardError;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Field validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// User ID already exists.
    #[error("user_id '{0}' already exists")]
    UserIdExists(String),

    /// Password policy or hashing failed.
    #[error("{0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<RegistrationError> for BoardError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Validation(inner) => BoardError::Validation(inner.to_string()),
            RegistrationError::UserIdExists(user_id) => {
                BoardError::Conflict(format!("user_id '{user_id}' already exists"))
            }
            RegistrationError::Password(inner) => inner.into(),
            RegistrationError::Database(msg) => BoardError::Database(msg),
        }
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired login ID.
    pub user_id: String,
    /// Plaintext password (8-128 characters, one uppercase).
    pub password: String,
    /// Display nickname.
    pub nickname: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            nickname: nickname.into(),
        }
    }
}

/// Register a new member.
pub async fn register(
    pool: &DbPool,
    request: &RegistrationRequest,
) -> Result<User, RegistrationError> {
    register_with_role(pool, request, Role::Member).await
}

/// Register a new user with a specific role.
///
/// Used for the administrator account configured at startup.
pub async fn register_with_role(
    pool: &DbPool,
    request: &RegistrationRequest,
    role: Role,
) -> Result<User, RegistrationError> {
    validate_user_id(&request.user_id)?;
    validate_nickname(&request.nickname)?;
    let password_hash = hash_password(&request.password)?;

    let repo = UserRepository::new(pool);
    if repo
        .exists(&request.user_id)
        .await
        .map_err(|e| RegistrationError::Database(e.to_string()))?
    {
        return Err(RegistrationError::UserIdExists(request.user_id.clone()));
    }

    let new_user =
        NewUser::new(&request.user_id, password_hash, &request.nickname).with_role(role);
    let user = repo.create(&new_user).await.map_err(|e| match e {
        BoardError::Conflict(_) => RegistrationError::UserIdExists(request.user_id.clone()),
        other => RegistrationError::Database(other.to_string()),
    })?;

    info!(user_id = %user.user_id, role = %role, "New user registered");

    Ok(user)
}

/// Create the configured administrator unless the user ID is taken.
///
/// Returns true if the account was created.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminConfig) -> Result<bool, RegistrationError> {
    let exists = UserRepository::new(pool)
        .exists(&admin.user_id)
        .await
        .map_err(|e| RegistrationError::Database(e.to_string()))?;
    if exists {
        info!(user_id = %admin.user_id, "Administrator account already exists");
        return Ok(false);
    }

    let request = RegistrationRequest::new(&admin.user_id, &admin.password, &admin.nickname);
    register_with_role(pool, &request, Role::Admin).await?;
    Ok(true)
}
