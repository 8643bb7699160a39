//! Login sessions backed by signed tokens and the allow-list.

use tracing::{debug, info, warn};

use super::password::verify_password;
use super::token::{IssuedToken, TokenService};
use crate::db::{AuthTokenRepository, DbPool, User, UserRepository};
use crate::{BoardError, Result};

/// Logs users in and out and resolves tokens to users.
pub struct SessionManager<'a> {
    pool: &'a DbPool,
    tokens: &'a TokenService,
    enforce_allow_list: bool,
}

impl<'a> SessionManager<'a> {
    /// Create a session manager that enforces the allow-list.
    pub fn new(pool: &'a DbPool, tokens: &'a TokenService) -> Self {
        Self {
            pool,
            tokens,
            enforce_allow_list: true,
        }
    }

    /// Choose whether tokens must also be on the allow-list.
    pub fn enforce_allow_list(mut self, enforce: bool) -> Self {
        self.enforce_allow_list = enforce;
        self
    }

    /// Check credentials and issue a token.
    ///
    /// Returns `NotFound` for an unknown user ID and `Auth` for a wrong
    /// password. The issued token is added to the allow-list.
    pub async fn login(&self, user_id: &str, password: &str) -> Result<IssuedToken> {
        let user = UserRepository::new(self.pool)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("user".to_string()))?;

        if let Err(e) = verify_password(password, &user.password) {
            warn!(user_id = %user_id, "Login failed: {}", e);
            return Err(e.into());
        }

        let issued = self.tokens.issue(&user.user_id)?;
        AuthTokenRepository::new(self.pool)
            .insert(&issued.token, &user.user_id, issued.claims.exp)
            .await?;

        info!(user_id = %user.user_id, "User logged in");
        Ok(issued)
    }

    /// Resolve a token to the user it was issued for.
    pub async fn validate(&self, token: &str) -> Result<User> {
        let claims = self.tokens.decode(token)?;

        if self.enforce_allow_list && !AuthTokenRepository::new(self.pool).contains(token).await? {
            debug!(user_id = %claims.sub, "Token is not on the allow-list");
            return Err(BoardError::Auth("token has been logged out".to_string()));
        }

        UserRepository::new(self.pool)
            .get_by_id(&claims.sub)
            .await?
            .ok_or_else(|| BoardError::Auth("token owner no longer exists".to_string()))
    }

    /// Remove a token from the allow-list.
    ///
    /// Idempotent: returns false if the token was not logged in.
    pub async fn logout(&self, token: &str) -> Result<bool> {
        let removed = AuthTokenRepository::new(self.pool).remove(token).await?;
        if removed {
            info!("User logged out");
        } else {
            debug!("Logout for a token that was not logged in");
        }
        Ok(removed)
    }

    /// Purge expired tokens from the allow-list.
    pub async fn cleanup_expired(&self) -> Result<u64> {
        AuthTokenRepository::new(self.pool).cleanup_expired().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registration::{register, RegistrationRequest};
    use crate::db::Database;
    use jsonwebtoken::Algorithm;

    async fn setup() -> (Database, TokenService) {
        let db = Database::open_in_memory().await.unwrap();
        register(
            db.pool(),
            &RegistrationRequest::new("alice", "Password123", "Alice"),
        )
        .await
        .unwrap();
        (db, TokenService::new("test-secret", Algorithm::HS256, 1))
    }

    #[tokio::test]
    async fn test_login_success() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens);

        let issued = sessions.login("alice", "Password123").await.unwrap();
        assert_eq!(issued.claims.sub, "alice");

        let user = sessions.validate(&issued.token).await.unwrap();
        assert_eq!(user.user_id, "alice");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens);

        let result = sessions.login("nobody", "Password123").await;
        assert!(matches!(result, Err(BoardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens);

        let result = sessions.login("alice", "WrongPassword").await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens);
        let issued = sessions.login("alice", "Password123").await.unwrap();

        assert!(sessions.logout(&issued.token).await.unwrap());
        assert!(matches!(
            sessions.validate(&issued.token).await,
            Err(BoardError::Auth(_))
        ));

        // Idempotent
        assert!(!sessions.logout(&issued.token).await.unwrap());
    }

    #[tokio::test]
    async fn test_signature_only_mode_ignores_allow_list() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens).enforce_allow_list(false);
        let issued = sessions.login("alice", "Password123").await.unwrap();

        sessions.logout(&issued.token).await.unwrap();
        assert!(sessions.validate(&issued.token).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejects_foreign_token() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens);

        // Well-signed but never logged in.
        let issued = tokens.issue("alice").unwrap();
        assert!(matches!(
            sessions.validate(&issued.token).await,
            Err(BoardError::Auth(_))
        ));
        assert!(sessions.validate("garbage").await.is_err());
    }

    #[tokio::test]
    async fn test_validate_rejects_deleted_user() {
        let (db, tokens) = setup().await;
        let sessions = SessionManager::new(db.pool(), &tokens).enforce_allow_list(false);
        let issued = sessions.login("alice", "Password123").await.unwrap();

        UserRepository::new(db.pool()).delete("alice").await.unwrap();
        assert!(matches!(
            sessions.validate(&issued.token).await,
            Err(BoardError::Auth(_))
        ));
    }
}
