//! Comment repository for Postboard.
//!
//! This module provides CRUD operations for comments in the database.

use chrono::Utc;
use sqlx::SqlitePool;

use super::comment::{Comment, NewComment};
use super::page::Page;
use crate::{BoardError, Result};

/// Repository for comment CRUD operations.
pub struct CommentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new comment.
    ///
    /// Returns the created comment with the assigned ID.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let result = sqlx::query(
            "INSERT INTO comments (author_id, post_id, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_comment.author_id)
        .bind(new_comment.post_id)
        .bind(&new_comment.content)
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, com_id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT com_id, author_id, post_id, content, created_at
             FROM comments WHERE com_id = ?",
        )
        .bind(com_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(comment)
    }

    /// Replace the content of a comment.
    ///
    /// Returns the updated comment, or None if not found.
    pub async fn update_content(&self, com_id: i64, content: &str) -> Result<Option<Comment>> {
        let result = sqlx::query("UPDATE comments SET content = ? WHERE com_id = ?")
            .bind(content)
            .bind(com_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(com_id).await
    }

    /// Delete a comment by ID.
    ///
    /// Returns true if a comment was deleted, false if not found.
    pub async fn delete(&self, com_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE com_id = ?")
            .bind(com_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// List one page of comments on a post in ID order.
    pub async fn list_by_post(&self, post_id: i64, page: Page) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT com_id, author_id, post_id, content, created_at
             FROM comments WHERE post_id = ? ORDER BY com_id ASC LIMIT ? OFFSET ?",
        )
        .bind(post_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(comments)
    }

    /// List one page of comments by an author in ID order.
    pub async fn list_by_author(&self, author_id: &str, page: Page) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT com_id, author_id, post_id, content, created_at
             FROM comments WHERE author_id = ? ORDER BY com_id ASC LIMIT ? OFFSET ?",
        )
        .bind(author_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(comments)
    }
}
