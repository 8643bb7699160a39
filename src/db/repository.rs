//! User repository for Postboard.
//!
//! This module provides CRUD operations for users in the database.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, SqlitePool};

use super::user::{NewUser, Role, User, UserUpdate};
use crate::{BoardError, Result};

/// Row as stored in the `users` table.
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    password: String,
    nickname: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: self.user_id,
            password: self.password,
            nickname: self.nickname,
            role: Role::parse_or_default(&self.role),
            created_at: self.created_at,
        }
    }
}

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns `BoardError::Conflict` if the user ID is already taken.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        sqlx::query(
            "INSERT INTO users (user_id, password, nickname, role, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_user.user_id)
        .bind(&new_user.password)
        .bind(&new_user.nickname)
        .bind(new_user.role.as_str())
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                BoardError::Conflict(format!("user_id '{}' already exists", new_user.user_id))
            }
            _ => BoardError::Database(e.to_string()),
        })?;

        self.get_by_id(&new_user.user_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, password, nickname, role, created_at
             FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(row.map(UserRow::into_user))
    }

    /// Check if a user ID is already taken.
    pub async fn exists(&self, user_id: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?)")
                .bind(user_id)
                .fetch_one(self.pool)
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(exists)
    }

    /// Update a user by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated user, or None if not found.
    pub async fn update(&self, user_id: &str, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(user_id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }
        if let Some(ref nickname) = update.nickname {
            separated.push("nickname = ");
            separated.push_bind_unseparated(nickname);
        }

        query.push(" WHERE user_id = ");
        query.push_bind(user_id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(user_id).await
    }

    /// Delete a user by ID.
    ///
    /// Posts, comments and session tokens of the user are removed by the
    /// foreign key cascade. Returns true if a user was deleted.
    pub async fn delete(&self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
