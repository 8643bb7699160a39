//! Comment model for Postboard.

use chrono::{DateTime, Utc};

/// A comment attached to a post.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub com_id: i64,
    /// ID of the user who wrote the comment.
    pub author_id: String,
    /// ID of the post the comment belongs to.
    pub post_id: i64,
    /// Comment body.
    pub content: String,
    /// Comment creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the commenting user.
    pub author_id: String,
    /// ID of the target post.
    pub post_id: i64,
    /// Comment body.
    pub content: String,
}

impl NewComment {
    /// Create a new comment with required fields.
    pub fn new(author_id: impl Into<String>, post_id: i64, content: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            post_id,
            content: content.into(),
        }
    }
}
