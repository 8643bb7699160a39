//! Request DTOs for the Web API.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Post creation and replacement body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PostRequest {
    /// Owner of the post; must match the token holder on creation.
    #[validate(length(min = 1, max = 50, message = "author must be 1-50 characters"))]
    pub author: String,
    /// Title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// Body.
    #[validate(length(min = 1, max = 10000, message = "content must be 1-10000 characters"))]
    pub content: String,
}

/// User registration body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Login ID.
    #[validate(length(min = 1, max = 50, message = "user_id must be 1-50 characters"))]
    pub user_id: String,
    /// Password (8-128 characters, at least one uppercase letter).
    pub password: String,
    /// Display nickname.
    #[validate(length(min = 1, max = 50, message = "nickname must be 1-50 characters"))]
    pub nickname: String,
}

/// Profile edit body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New password (8-128 characters, at least one uppercase letter).
    pub password: String,
    /// New nickname.
    #[validate(length(min = 1, max = 50, message = "nickname must be 1-50 characters"))]
    pub nickname: String,
}

/// Login body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Login ID.
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Comment creation body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// Commenting user.
    #[validate(length(min = 1, max = 50, message = "author_id must be 1-50 characters"))]
    pub author_id: String,
    /// Target post.
    pub post_id: i64,
    /// Comment body.
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

/// Comment edit body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    /// New comment body.
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

/// Page selector for list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default 1, 100 records per page).
    pub page: Option<i64>,
}
