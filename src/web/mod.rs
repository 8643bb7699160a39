//! Web API module for Postboard.
//!
//! REST endpoints for posts, comments and user accounts, with bearer
//! token authentication and a Swagger UI at `/docs`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
