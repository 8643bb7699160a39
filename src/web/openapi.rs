//! OpenAPI document served by Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::dto::{
    CommentData, CommentListResponse, CommentResponse, CreateCommentRequest, LoginRequest,
    MessageResponse, PostData, PostListResponse, PostRequest, PostResponse, RegisterRequest,
    TokenResponse, UpdateCommentRequest, UpdateUserRequest, UpdatedUserData, UpdatedUserResponse,
    UserData, UserResponse,
};
use super::error::{ErrorBody, ErrorCode};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Postboard API", description = "Bulletin board with posts, comments and users"),
    paths(
        handlers::post::create_post,
        handlers::post::list_posts,
        handlers::post::get_post,
        handlers::post::update_post,
        handlers::post::delete_post,
        handlers::post::list_post_comments,
        handlers::user::register,
        handlers::user::get_user,
        handlers::user::update_user,
        handlers::user::delete_user,
        handlers::user::list_user_posts,
        handlers::user::list_user_comments,
        handlers::user::login,
        handlers::user::logout,
        handlers::comment::create_comment,
        handlers::comment::update_comment,
        handlers::comment::delete_comment,
    ),
    components(schemas(
        ErrorBody,
        ErrorCode,
        MessageResponse,
        PostRequest,
        PostData,
        PostResponse,
        PostListResponse,
        RegisterRequest,
        UpdateUserRequest,
        LoginRequest,
        UserData,
        UserResponse,
        UpdatedUserData,
        UpdatedUserResponse,
        TokenResponse,
        CreateCommentRequest,
        UpdateCommentRequest,
        CommentData,
        CommentResponse,
        CommentListResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "posts", description = "Posts"),
        (name = "comments", description = "Comments"),
        (name = "users", description = "Accounts and sessions")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
