//! Router configuration for Web API.

use axum::{
    response::Redirect,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_comment, create_post, delete_comment, delete_post, delete_user, get_post, get_user,
    list_post_comments, list_posts, list_user_comments, list_user_posts, login, logout, register,
    update_comment, update_post, update_user, AppState,
};
use super::middleware::create_cors_layer;
use super::openapi::ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let post_routes = Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/:post_id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/posts/:post_id/comments", get(list_post_comments));

    let user_routes = Router::new()
        .route("/api/users", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users/logout", post(logout))
        .route(
            "/api/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/:user_id/posts", get(list_user_posts))
        .route("/api/users/:user_id/comments", get(list_user_comments));

    let comment_routes = Router::new()
        .route("/api/comments", post(create_comment))
        .route(
            "/api/comments/:com_id",
            put(update_comment).delete(delete_comment),
        );

    Router::new()
        .merge(post_routes)
        .merge(user_routes)
        .merge(comment_routes)
        .merge(create_health_router())
        .merge(create_swagger_router())
        .route("/", get(|| async { Redirect::temporary("/docs") }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_check))
}

/// Swagger UI at `/docs` backed by the generated OpenAPI document.
pub fn create_swagger_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
