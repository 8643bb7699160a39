//! Response DTOs for the Web API.
//!
//! Every body carries a human-readable `message`; reads add `data`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{IssuedToken, UserProfile};
use crate::board::{Comment, Post};
use crate::db::User;

/// Body with only a message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome message.
    pub message: String,
}

impl MessageResponse {
    /// Create a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Post as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostData {
    /// Post ID.
    pub post_id: i64,
    /// Owner user ID.
    pub author: String,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostData {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            author: post.author,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

/// Single post body.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    /// Outcome message.
    pub message: String,
    /// The post.
    pub data: PostData,
}

/// Post page body.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    /// Outcome message.
    pub message: String,
    /// Up to 100 posts.
    pub data: Vec<PostData>,
}

/// Comment as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentData {
    /// Comment ID.
    pub com_id: i64,
    /// Author user ID.
    pub author_id: String,
    /// Post the comment belongs to.
    pub post_id: i64,
    /// Body.
    pub content: String,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentData {
    fn from(comment: Comment) -> Self {
        Self {
            com_id: comment.com_id,
            author_id: comment.author_id,
            post_id: comment.post_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Single comment body.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    /// Outcome message.
    pub message: String,
    /// The comment.
    pub data: CommentData,
}

/// Comment page body.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListResponse {
    /// Outcome message.
    pub message: String,
    /// Up to 100 comments.
    pub data: Vec<CommentData>,
}

/// Public user information.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserData {
    /// Login ID.
    pub user_id: String,
    /// Nickname.
    pub nickname: String,
    /// `member` or `admin`.
    pub role: String,
    /// Account creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserData {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            nickname: profile.nickname,
            role: profile.role.to_string(),
            created_at: profile.created_at,
        }
    }
}

/// Single user body.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// Outcome message.
    pub message: String,
    /// The user.
    pub data: UserData,
}

/// Account after a profile edit.
///
/// `password` is the stored Argon2 hash, never the plaintext.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedUserData {
    /// Login ID.
    pub user_id: String,
    /// Password hash.
    pub password: String,
    /// Nickname.
    pub nickname: String,
}

impl From<User> for UpdatedUserData {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            password: user.password,
            nickname: user.nickname,
        }
    }
}

/// Profile edit body.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedUserResponse {
    /// Outcome message.
    pub message: String,
    /// The account.
    pub data: UpdatedUserData,
}

/// Login result.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.token,
            token_type: "bearer".to_string(),
        }
    }
}
