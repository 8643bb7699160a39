//! Input validation for account fields.

use thiserror::Error;

/// Maximum user ID length.
pub const MAX_USER_ID_LENGTH: usize = 50;

/// Maximum nickname length.
pub const MAX_NICKNAME_LENGTH: usize = 50;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// User ID is empty.
    #[error("user_id cannot be empty")]
    UserIdEmpty,

    /// User ID is too long.
    #[error("user_id must be at most {MAX_USER_ID_LENGTH} characters")]
    UserIdTooLong,

    /// User ID contains whitespace or control characters.
    #[error("user_id cannot contain whitespace or control characters")]
    UserIdInvalidChars,

    /// Nickname is empty.
    #[error("nickname cannot be empty")]
    NicknameEmpty,

    /// Nickname is too long.
    #[error("nickname must be at most {MAX_NICKNAME_LENGTH} characters")]
    NicknameTooLong,

    /// Nickname contains invalid characters.
    #[error("nickname contains invalid characters")]
    NicknameInvalidChars,
}

/// Validate a login ID.
///
/// # Examples
///
/// ```
/// use postboard::auth::validation::validate_user_id;
///
/// assert!(validate_user_id("admin01").is_ok());
/// assert!(validate_user_id("").is_err());
/// assert!(validate_user_id("has space").is_err());
/// ```
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.is_empty() {
        return Err(ValidationError::UserIdEmpty);
    }
    if user_id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(ValidationError::UserIdTooLong);
    }
    if user_id
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ValidationError::UserIdInvalidChars);
    }
    Ok(())
}

/// Validate a display nickname.
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.trim().is_empty() {
        return Err(ValidationError::NicknameEmpty);
    }
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(ValidationError::NicknameTooLong);
    }
    if nickname.chars().any(|c| c.is_control()) {
        return Err(ValidationError::NicknameInvalidChars);
    }
    Ok(())
}
