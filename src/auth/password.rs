//! Password hashing and validation for Postboard.
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::BoardError;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Password has no uppercase character.
    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// Password hash is invalid.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

impl From<PasswordError> for BoardError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::TooShort | PasswordError::TooLong | PasswordError::MissingUppercase => {
                BoardError::Validation(e.to_string())
            }
            PasswordError::VerificationFailed => {
                BoardError::Auth("invalid credentials".to_string())
            }
            PasswordError::HashError(_) | PasswordError::InvalidHash => {
                BoardError::Internal(e.to_string())
            }
        }
    }
}

/// Create the Argon2 hasher.
///
/// Parameters:
/// - Memory cost: 64 MB (65536 KiB)
/// - Time cost: 3 iterations
/// - Parallelism: 4 lanes
fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let m_cost = 65536;
    let t_cost = 3;
    let p_cost = 4;

    let params = Params::new(m_cost, t_cost, p_cost, None)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a password using Argon2id.
///
/// The password policy is checked first. Returns a PHC-formatted hash
/// string that includes the salt and parameters.
///
/// # Examples
///
/// ```
/// use postboard::hash_password;
///
/// let hash = hash_password("Secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password(password)?;

    let salt = SaltString::generate(&mut OsRng);

    let hash = create_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Returns `Ok(())` if the password matches, or an error if it doesn't.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    // Parameters come from the parsed hash.
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::VerificationFailed)
}

/// Validate password requirements.
///
/// Checks:
/// - Minimum length: 8 characters
/// - Maximum length: 128 characters
/// - At least one uppercase letter
///
/// # Examples
///
/// ```
/// use postboard::validate_password;
///
/// assert!(validate_password("Short1").is_err());
/// assert!(validate_password("lowercase_only").is_err());
/// assert!(validate_password("A1234567890").is_ok());
/// ```
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(PasswordError::MissingUppercase);
    }
    Ok(())
}
