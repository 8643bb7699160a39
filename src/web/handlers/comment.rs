//! Comment handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::board::NewComment;
use crate::web::dto::{
    CommentResponse, CreateCommentRequest, MessageResponse, PathParam, UpdateCommentRequest,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// POST /api/comments - Comment on a post.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = MessageResponse),
        (status = 404, description = "Post or author not found"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let new_comment = NewComment::new(req.author_id, req.post_id, req.content);
    state.board().create_comment(&new_comment).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Comment created")),
    ))
}

/// PUT /api/comments/:com_id - Replace a comment's content.
#[utoipa::path(
    put,
    path = "/api/comments/{com_id}",
    tag = "comments",
    params(("com_id" = i64, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "Comment not found"),
        (status = 422, description = "Invalid body")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    PathParam(com_id): PathParam<i64>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let comment = state
        .board()
        .update_comment(&auth.user, com_id, &req.content)
        .await?;

    Ok(Json(CommentResponse {
        message: format!("Comment {com_id} updated"),
        data: comment.into(),
    }))
}

/// DELETE /api/comments/:com_id - Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{com_id}",
    tag = "comments",
    params(("com_id" = i64, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "Comment not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    PathParam(com_id): PathParam<i64>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.board().delete_comment(&auth.user, com_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Comment {com_id} deleted"
    ))))
}
