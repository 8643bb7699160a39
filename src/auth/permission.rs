//! Ownership checks for Postboard.
//!
//! A resource may be modified by its owner or by an administrator.

use thiserror::Error;

use crate::db::{Role, User};
use crate::BoardError;

/// Permission-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Acting user neither owns the resource nor is an administrator.
    #[error("user '{actor}' cannot modify a resource owned by '{owner}'")]
    NotOwner {
        /// Acting user ID.
        actor: String,
        /// Owner user ID.
        owner: String,
    },

    /// Acting user tried to create a resource in someone else's name.
    #[error("user '{actor}' cannot act as '{claimed}'")]
    IdentityMismatch {
        /// Acting user ID.
        actor: String,
        /// Claimed user ID.
        claimed: String,
    },

    /// Only administrators may hand a resource to another user.
    #[error("only administrators can change the owner of a resource")]
    ReassignmentDenied,
}

impl From<PermissionError> for BoardError {
    fn from(e: PermissionError) -> Self {
        BoardError::Permission(e.to_string())
    }
}

/// Check the owner-or-admin rule.
///
/// # Examples
///
/// ```
/// use postboard::auth::check_ownership;
/// use postboard::db::Role;
///
/// assert!(check_ownership("alice", "alice", Role::Member).is_ok());
/// assert!(check_ownership("root", "alice", Role::Admin).is_ok());
/// assert!(check_ownership("bob", "alice", Role::Member).is_err());
/// ```
pub fn check_ownership(acting_id: &str, owner: &str, role: Role) -> Result<(), PermissionError> {
    if role.is_admin() || acting_id == owner {
        return Ok(());
    }
    Err(PermissionError::NotOwner {
        actor: acting_id.to_string(),
        owner: owner.to_string(),
    })
}

/// Check if a user can modify a resource owned by `owner`.
pub fn can_modify_resource(actor: &User, owner: &str) -> Result<(), PermissionError> {
    check_ownership(&actor.user_id, owner, actor.role)
}

/// Check that a user acts in their own name.
///
/// Administrators get no exception here.
pub fn require_identity(actor: &User, claimed: &str) -> Result<(), PermissionError> {
    if actor.user_id == claimed {
        return Ok(());
    }
    Err(PermissionError::IdentityMismatch {
        actor: actor.user_id.clone(),
        claimed: claimed.to_string(),
    })
}
