//! User account and session handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::auth::{self, ProfileUpdateRequest, RegistrationRequest};
use crate::web::dto::{
    CommentListResponse, LoginRequest, MessageResponse, PageParam, PathParam, PostListResponse,
    RegisterRequest, TokenResponse, UpdateUserRequest, UpdatedUserResponse, UserResponse,
    ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::{AuthUser, BearerToken};
use crate::BoardError;

/// POST /api/users - Register a new member.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 409, description = "User ID already taken"),
        (status = 422, description = "Invalid body or password policy violation")
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = RegistrationRequest::new(req.user_id, req.password, req.nickname);
    auth::register(state.db.pool(), &request)
        .await
        .map_err(BoardError::from)?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

/// GET /api/users/:user_id - Get a user's public profile.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = auth::get_profile(state.db.pool(), &user_id).await?;

    Ok(Json(UserResponse {
        message: "User retrieved".to_string(),
        data: profile.into(),
    }))
}

/// PUT /api/users/:user_id - Replace password and nickname.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UpdatedUserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid body or password policy violation")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
    auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UpdatedUserResponse>, ApiError> {
    let request = ProfileUpdateRequest::new(req.password, req.nickname);
    let user =
        auth::update_profile(state.db.pool(), &auth_user.user, &user_id, &request).await?;

    Ok(Json(UpdatedUserResponse {
        message: format!("User {user_id} updated"),
        data: user.into(),
    }))
}

/// DELETE /api/users/:user_id - Delete an account and everything it owns.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the owner or an administrator"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    auth::delete_account(state.db.pool(), &auth_user.user, &user_id).await?;

    Ok(Json(MessageResponse::new(format!("User {user_id} deleted"))))
}

/// GET /api/users/:user_id/posts - List posts written by a user.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID"),
        crate::web::dto::PageQuery
    ),
    responses(
        (status = 200, description = "One page of posts", body = PostListResponse),
        (status = 422, description = "Invalid page")
    )
)]
pub async fn list_user_posts(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
    PageParam(page): PageParam,
) -> Result<Json<PostListResponse>, ApiError> {
    let posts = state.board().list_posts_by_author(&user_id, page).await?;

    Ok(Json(PostListResponse {
        message: format!("Posts by {user_id} retrieved"),
        data: posts.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/users/:user_id/comments - List comments written by a user.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/comments",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID"),
        crate::web::dto::PageQuery
    ),
    responses(
        (status = 200, description = "One page of comments", body = CommentListResponse),
        (status = 422, description = "Invalid page")
    )
)]
pub async fn list_user_comments(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
    PageParam(page): PageParam,
) -> Result<Json<CommentListResponse>, ApiError> {
    let comments = state
        .board()
        .list_comments_by_author(&user_id, page)
        .await?;

    Ok(Json(CommentListResponse {
        message: format!("Comments by {user_id} retrieved"),
        data: comments.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/users/login - Exchange credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state.sessions().login(&req.user_id, &req.password).await?;

    Ok(Json(issued.into()))
}

/// POST /api/users/logout - Drop the presented token from the allow-list.
///
/// Succeeds whether or not the token was still active.
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = "users",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Missing authorization header")
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.sessions().logout(&token).await?;
    let message = if removed {
        "Logged out"
    } else {
        "Already logged out"
    };

    Ok(Json(MessageResponse::new(message)))
}
