//! User model for Postboard.
//!
//! This module defines the User struct and Role enum.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// User role for permission management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Regular member.
    #[default]
    Member,
    /// Administrator; may modify any resource.
    Admin,
}

impl Role {
    /// Convert role to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored role, falling back to `Member` for unknown values.
    ///
    /// # Examples
    ///
    /// ```
    /// use postboard::db::Role;
    ///
    /// assert_eq!(Role::parse_or_default("admin"), Role::Admin);
    /// assert_eq!(Role::parse_or_default("superuser"), Role::Member);
    /// ```
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Check if this role is the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// A registered user.
#[derive(Debug, Clone)]
pub struct User {
    /// Login ID (unique).
    pub user_id: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Role for permissions.
    pub role: Role,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login ID.
    pub user_id: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// User role (defaults to Member).
    pub role: Role,
}

impl NewUser {
    /// Create a new member.
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            nickname: nickname.into(),
            role: Role::Member,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Data for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New password hash.
    pub password: Option<String>,
    /// New nickname.
    pub nickname: Option<String>,
}

impl UserUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set new nickname.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.nickname.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Member.as_str(), "member");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("sysop".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_parse_or_default() {
        assert_eq!(Role::parse_or_default("admin"), Role::Admin);
        assert_eq!(Role::parse_or_default("member"), Role::Member);
        assert_eq!(Role::parse_or_default(""), Role::Member);
        assert_eq!(Role::parse_or_default("owner"), Role::Member);
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Member);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Admin), "admin");
    }

    #[test]
    fn test_new_user_builder() {
        let user = NewUser::new("alice", "hash", "Alice");
        assert_eq!(user.user_id, "alice");
        assert_eq!(user.role, Role::Member);

        let admin = NewUser::new("root", "hash", "Root").with_role(Role::Admin);
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_user_update_builder() {
        let update = UserUpdate::new();
        assert!(update.is_empty());

        let update = UserUpdate::new().nickname("Bob").password("newhash");
        assert!(!update.is_empty());
        assert_eq!(update.nickname, Some("Bob".to_string()));
        assert_eq!(update.password, Some("newhash".to_string()));
    }
}
