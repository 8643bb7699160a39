//! Session allow-list repository.
//!
//! A token present in `auth_tokens` is logged in. Logging out deletes the
//! row, so a token that still verifies cryptographically is rejected once
//! its row is gone.

use chrono::Utc;

use super::DbPool;
use crate::{BoardError, Result};

/// Repository for allow-list operations.
pub struct AuthTokenRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AuthTokenRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Add an issued token to the allow-list.
    pub async fn insert(&self, token: &str, user_id: &str, expires_at: i64) -> Result<()> {
        sqlx::query(
            "INSERT INTO auth_tokens (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(token)
        .bind(user_id)
        .bind(Utc::now())
        .bind(expires_at)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(())
    }

    /// Check whether a token is on the allow-list and not yet expired.
    pub async fn contains(&self, token: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM auth_tokens WHERE token = ? AND expires_at > ?)",
        )
        .bind(token)
        .bind(Utc::now().timestamp())
        .fetch_one(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(exists)
    }

    /// Remove a token. Returns true if it was present.
    pub async fn remove(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE token = ?")
            .bind(token)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete expired tokens (cleanup).
    pub async fn cleanup_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE expires_at <= ?")
            .bind(Utc::now().timestamp())
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, NewUser, UserRepository};

    async fn setup() -> Database {
        let db = Database::open_in_memory().await.unwrap();
        UserRepository::new(db.pool())
            .create(&NewUser::new("alice", "hash", "Alice"))
            .await
            .unwrap();
        db
    }

    fn in_one_day() -> i64 {
        Utc::now().timestamp() + 86_400
    }

    async fn stored_rows(db: &Database, user_id: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM auth_tokens WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_contains() {
        let db = setup().await;
        let repo = AuthTokenRepository::new(db.pool());

        repo.insert("tok-1", "alice", in_one_day()).await.unwrap();

        assert!(repo.contains("tok-1").await.unwrap());
        assert!(!repo.contains("tok-2").await.unwrap());
        assert_eq!(stored_rows(&db, "alice").await, 1);
    }

    #[tokio::test]
    async fn test_expired_token_not_contained() {
        let db = setup().await;
        let repo = AuthTokenRepository::new(db.pool());

        repo.insert("old", "alice", Utc::now().timestamp() - 10)
            .await
            .unwrap();
        assert!(!repo.contains("old").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let db = setup().await;
        let repo = AuthTokenRepository::new(db.pool());
        repo.insert("tok-1", "alice", in_one_day()).await.unwrap();

        assert!(repo.remove("tok-1").await.unwrap());
        assert!(!repo.remove("tok-1").await.unwrap());
        assert!(!repo.contains("tok-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let db = setup().await;
        let repo = AuthTokenRepository::new(db.pool());
        repo.insert("old", "alice", Utc::now().timestamp() - 10)
            .await
            .unwrap();
        repo.insert("fresh", "alice", in_one_day()).await.unwrap();

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(stored_rows(&db, "alice").await, 1);
        assert!(repo.contains("fresh").await.unwrap());
    }

    #[tokio::test]
    async fn test_tokens_removed_with_user() {
        let db = setup().await;
        let repo = AuthTokenRepository::new(db.pool());
        repo.insert("tok-1", "alice", in_one_day()).await.unwrap();

        UserRepository::new(db.pool()).delete("alice").await.unwrap();
        assert_eq!(stored_rows(&db, "alice").await, 0);
    }
}
