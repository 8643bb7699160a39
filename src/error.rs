//! Error types for Postboard.

use thiserror::Error;

/// Common error type for Postboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error (bad credentials, invalid or revoked token).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure (hashing, token signing).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for Postboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = BoardError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_permission_error_display() {
        let err = BoardError::Permission("not the owner".to_string());
        assert_eq!(err.to_string(), "permission denied: not the owner");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = BoardError::NotFound("post".to_string());
        assert_eq!(err.to_string(), "post not found");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = BoardError::Conflict("user_id already exists".to_string());
        assert_eq!(err.to_string(), "conflict: user_id already exists");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: BoardError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, BoardError::Database(_)));
    }
}
