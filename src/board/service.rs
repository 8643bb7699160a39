//! Board service for Postboard.
//!
//! This module provides the post and comment operations with built-in
//! ownership checks. Mutations load the resource first (`NotFound`), then
//! apply the owner-or-admin rule (`Permission`), then write.

use tracing::info;

use super::comment::{Comment, NewComment};
use super::comment_repository::CommentRepository;
use super::page::Page;
use super::post::{NewPost, Post, PostUpdate};
use super::post_repository::PostRepository;
use crate::auth::{can_modify_resource, require_identity, PermissionError};
use crate::db::{Database, User, UserRepository};
use crate::{BoardError, Result};

/// High-level board operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn posts(&self) -> PostRepository<'_> {
        PostRepository::new(self.db.pool())
    }

    fn comments(&self) -> CommentRepository<'_> {
        CommentRepository::new(self.db.pool())
    }

    async fn load_post(&self, post_id: i64) -> Result<Post> {
        self.posts()
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("post".to_string()))
    }

    async fn load_comment(&self, com_id: i64) -> Result<Comment> {
        self.comments()
            .get_by_id(com_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("comment".to_string()))
    }

    async fn require_user(&self, user_id: &str) -> Result<()> {
        if UserRepository::new(self.db.pool()).exists(user_id).await? {
            Ok(())
        } else {
            Err(BoardError::NotFound("user".to_string()))
        }
    }

    // ---- posts ----

    /// List one page of posts.
    pub async fn list_posts(&self, page: Page) -> Result<Vec<Post>> {
        self.posts().list(page).await
    }

    /// List one page of posts written by a user.
    pub async fn list_posts_by_author(&self, author: &str, page: Page) -> Result<Vec<Post>> {
        self.posts().list_by_author(author, page).await
    }

    /// Get a single post.
    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        self.load_post(post_id).await
    }

    /// Create a post. The author must be the acting user.
    pub async fn create_post(&self, actor: &User, new_post: &NewPost) -> Result<Post> {
        require_identity(actor, &new_post.author)?;

        let post = self.posts().create(new_post).await?;
        info!(post_id = post.post_id, author = %post.author, "Post created");
        Ok(post)
    }

    /// Update a post.
    ///
    /// Only administrators may change the author, and only to an existing
    /// user.
    pub async fn update_post(
        &self,
        actor: &User,
        post_id: i64,
        update: &PostUpdate,
    ) -> Result<Post> {
        let post = self.load_post(post_id).await?;
        can_modify_resource(actor, &post.author)?;

        if let Some(ref new_author) = update.author {
            if *new_author != post.author {
                if !actor.is_admin() {
                    return Err(PermissionError::ReassignmentDenied.into());
                }
                self.require_user(new_author).await?;
            }
        }

        let updated = self
            .posts()
            .update(post_id, update)
            .await?
            .ok_or_else(|| BoardError::NotFound("post".to_string()))?;

        info!(post_id = post_id, actor = %actor.user_id, "Post updated");
        Ok(updated)
    }

    /// Delete a post and its comments.
    pub async fn delete_post(&self, actor: &User, post_id: i64) -> Result<()> {
        let post = self.load_post(post_id).await?;
        can_modify_resource(actor, &post.author)?;

        if !self.posts().delete(post_id).await? {
            return Err(BoardError::NotFound("post".to_string()));
        }

        info!(post_id = post_id, actor = %actor.user_id, "Post deleted");
        Ok(())
    }

    // ---- comments ----

    /// List one page of comments on a post.
    pub async fn list_comments(&self, post_id: i64, page: Page) -> Result<Vec<Comment>> {
        self.comments().list_by_post(post_id, page).await
    }

    /// List one page of comments written by a user.
    pub async fn list_comments_by_author(
        &self,
        author_id: &str,
        page: Page,
    ) -> Result<Vec<Comment>> {
        self.comments().list_by_author(author_id, page).await
    }

    /// Create a comment. The post and the author must exist.
    pub async fn create_comment(&self, new_comment: &NewComment) -> Result<Comment> {
        if !self.posts().exists(new_comment.post_id).await? {
            return Err(BoardError::NotFound("post".to_string()));
        }
        self.require_user(&new_comment.author_id).await?;

        let comment = self.comments().create(new_comment).await?;
        info!(
            com_id = comment.com_id,
            post_id = comment.post_id,
            author_id = %comment.author_id,
            "Comment created"
        );
        Ok(comment)
    }

    /// Replace the content of a comment.
    pub async fn update_comment(
        &self,
        actor: &User,
        com_id: i64,
        content: &str,
    ) -> Result<Comment> {
        let comment = self.load_comment(com_id).await?;
        can_modify_resource(actor, &comment.author_id)?;

        let updated = self
            .comments()
            .update_content(com_id, content)
            .await?
            .ok_or_else(|| BoardError::NotFound("comment".to_string()))?;

        info!(com_id = com_id, actor = %actor.user_id, "Comment updated");
        Ok(updated)
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, actor: &User, com_id: i64) -> Result<()> {
        let comment = self.load_comment(com_id).await?;
        can_modify_resource(actor, &comment.author_id)?;

        if !self.comments().delete(com_id).await? {
            return Err(BoardError::NotFound("comment".to_string()));
        }

        info!(com_id = com_id, actor = %actor.user_id, "Comment deleted");
        Ok(())
    }
}
