//! Authentication module for Postboard.
//!
//! This module provides password hashing, token issuance, sessions,
//! user registration, profile management and ownership checks.

mod password;
pub mod permission;
mod profile;
mod registration;
mod session;
mod token;
pub mod validation;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use permission::{can_modify_resource, check_ownership, require_identity, PermissionError};
pub use profile::{delete_account, get_profile, update_profile, ProfileUpdateRequest, UserProfile};
pub use registration::{
    ensure_admin, register, register_with_role, RegistrationError, RegistrationRequest,
};
pub use session::SessionManager;
pub use token::{parse_algorithm, IssuedToken, TokenClaims, TokenError, TokenService};
pub use validation::ValidationError;
