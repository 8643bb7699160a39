//! Postboard - a bulletin board REST backend.
//!
//! Posts, comments and user accounts served over JSON, with Argon2
//! password hashing, JWT bearer tokens backed by a session allow-list,
//! and owner-or-admin authorization.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    can_modify_resource, check_ownership, delete_account, ensure_admin, get_profile,
    hash_password, register, register_with_role, update_profile, validate_password,
    verify_password, IssuedToken, PasswordError, PermissionError, ProfileUpdateRequest,
    RegistrationError, RegistrationRequest, SessionManager, TokenService, UserProfile,
    ValidationError,
};
pub use board::{BoardService, Comment, NewComment, NewPost, Page, Post, PostUpdate, PAGE_SIZE};
pub use config::Config;
pub use db::{Database, NewUser, Role, User, UserRepository, UserUpdate};
pub use error::{BoardError, Result};
pub use web::{create_router, AppState, WebServer};
