//! Post model for Postboard.

use chrono::{DateTime, Utc};

/// A post on the board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub post_id: i64,
    /// ID of the user who owns the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Post creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// ID of the user creating the post.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl NewPost {
    /// Create a new post with required fields.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Data for updating an existing post.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    /// New owner.
    pub author: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
}

impl PostUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }
}
