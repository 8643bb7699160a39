//! Middleware and extractors for the Web API.

pub mod auth;
pub mod cors;

pub use auth::{extract_token, AuthUser, BearerToken};
pub use cors::create_cors_layer;
