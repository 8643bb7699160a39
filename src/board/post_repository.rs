//! Post repository for Postboard.
//!
//! This module provides CRUD operations for posts in the database.

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};

use super::page::Page;
use super::post::{NewPost, Post, PostUpdate};
use crate::{BoardError, Result};

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let result = sqlx::query(
            "INSERT INTO posts (author, title, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_post.author)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(Utc::now())
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT post_id, author, title, content, created_at FROM posts WHERE post_id = ?",
        )
        .bind(post_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(post)
    }

    /// Check whether a post exists.
    pub async fn exists(&self, post_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE post_id = ?)")
                .bind(post_id)
                .fetch_one(self.pool)
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(exists)
    }

    /// Update a post by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated post, or None if not found.
    pub async fn update(&self, post_id: i64, update: &PostUpdate) -> Result<Option<Post>> {
        if update.is_empty() {
            return self.get_by_id(post_id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut separated = query.separated(", ");

        if let Some(ref author) = update.author {
            separated.push("author = ");
            separated.push_bind_unseparated(author);
        }
        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content);
        }

        query.push(" WHERE post_id = ");
        query.push_bind(post_id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(post_id).await
    }

    /// Delete a post by ID.
    ///
    /// Comments on the post are removed by the foreign key cascade.
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, post_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE post_id = ?")
            .bind(post_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// List one page of all posts in ID order.
    pub async fn list(&self, page: Page) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT post_id, author, title, content, created_at
             FROM posts ORDER BY post_id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// List one page of posts by an author in ID order.
    pub async fn list_by_author(&self, author: &str, page: Page) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT post_id, author, title, content, created_at
             FROM posts WHERE author = ? ORDER BY post_id ASC LIMIT ? OFFSET ?",
        )
        .bind(author)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(posts)
    }
}
