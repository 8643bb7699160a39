//! Post handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::board::{NewPost, PostUpdate};
use crate::web::dto::{
    CommentListResponse, MessageResponse, PageParam, PathParam, PostListResponse, PostRequest,
    PostResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// POST /api/posts - Create a post as the token holder.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Author differs from the token holder"),
        (status = 422, description = "Invalid body")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let new_post = NewPost::new(req.author, req.title, req.content);
    state.board().create_post(&auth.user, &new_post).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Post created"))))
}

/// GET /api/posts - List posts, 100 per page.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(crate::web::dto::PageQuery),
    responses(
        (status = 200, description = "One page of posts", body = PostListResponse),
        (status = 422, description = "Invalid page")
    )
)]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    PageParam(page): PageParam,
) -> Result<Json<PostListResponse>, ApiError> {
    let posts = state.board().list_posts(page).await?;

    Ok(Json(PostListResponse {
        message: "Posts retrieved".to_string(),
        data: posts.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/posts/:post_id - Get a post.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    PathParam(post_id): PathParam<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.board().get_post(post_id).await?;

    Ok(Json(PostResponse {
        message: "Post retrieved".to_string(),
        data: post.into(),
    }))
}

/// PUT /api/posts/:post_id - Replace a post's author, title and content.
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "Post or new author not found"),
        (status = 422, description = "Invalid body")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    PathParam(post_id): PathParam<i64>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let update = PostUpdate::new()
        .author(req.author)
        .title(req.title)
        .content(req.content);
    let post = state
        .board()
        .update_post(&auth.user, post_id, &update)
        .await?;

    Ok(Json(PostResponse {
        message: format!("Post {post_id} updated"),
        data: post.into(),
    }))
}

/// DELETE /api/posts/:post_id - Delete a post and its comments.
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    PathParam(post_id): PathParam<i64>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.board().delete_post(&auth.user, post_id).await?;

    Ok(Json(MessageResponse::new(format!("Post {post_id} deleted"))))
}

/// GET /api/posts/:post_id/comments - List comments on a post.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        crate::web::dto::PageQuery
    ),
    responses(
        (status = 200, description = "One page of comments", body = CommentListResponse),
        (status = 422, description = "Invalid page")
    )
)]
pub async fn list_post_comments(
    State(state): State<Arc<AppState>>,
    PathParam(post_id): PathParam<i64>,
    PageParam(page): PageParam,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = state.board().list_comments(post_id, page).await?;

    Ok(Json(CommentListResponse {
        message: "Comments retrieved".to_string(),
        data: comments.into_iter().map(Into::into).collect(),
    }))
}
