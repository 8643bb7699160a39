//! Account profile operations: view, edit, delete.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::auth::permission::can_modify_resource;
use crate::auth::validation::validate_nickname;
use crate::auth::hash_password;
use crate::db::{DbPool, Role, User, UserRepository, UserUpdate};
use crate::{BoardError, Result};

/// Public view of a user, without the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Login ID.
    pub user_id: String,
    /// Display name.
    pub nickname: String,
    /// Role.
    pub role: Role,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            nickname: user.nickname,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Replacement credentials for a profile edit.
#[derive(Debug, Clone)]
pub struct ProfileUpdateRequest {
    /// New plaintext password.
    pub password: String,
    /// New nickname.
    pub nickname: String,
}

impl ProfileUpdateRequest {
    /// Create a new update request.
    pub fn new(password: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            nickname: nickname.into(),
        }
    }
}

/// Load a user or fail with `NotFound`.
async fn load_user(repo: &UserRepository<'_>, user_id: &str) -> Result<User> {
    repo.get_by_id(user_id)
        .await?
        .ok_or_else(|| BoardError::NotFound("user".to_string()))
}

/// Get a user's public profile.
pub async fn get_profile(pool: &DbPool, user_id: &str) -> Result<UserProfile> {
    let repo = UserRepository::new(pool);
    Ok(load_user(&repo, user_id).await?.into())
}

/// Replace a user's password and nickname.
///
/// The acting user must own the account or be an administrator. The new
/// password is checked against the password policy and re-hashed.
pub async fn update_profile(
    pool: &DbPool,
    actor: &User,
    user_id: &str,
    request: &ProfileUpdateRequest,
) -> Result<User> {
    let repo = UserRepository::new(pool);
    let target = load_user(&repo, user_id).await?;
    can_modify_resource(actor, &target.user_id)?;

    validate_nickname(&request.nickname).map_err(|e| BoardError::Validation(e.to_string()))?;
    let password_hash = hash_password(&request.password)?;

    let update = UserUpdate::new()
        .password(password_hash)
        .nickname(&request.nickname);
    let updated = repo
        .update(user_id, &update)
        .await?
        .ok_or_else(|| BoardError::NotFound("user".to_string()))?;

    info!(user_id = %user_id, actor = %actor.user_id, "Profile updated");

    Ok(updated)
}

/// Delete an account together with its posts, comments and sessions.
pub async fn delete_account(pool: &DbPool, actor: &User, user_id: &str) -> Result<()> {
    let repo = UserRepository::new(pool);
    let target = load_user(&repo, user_id).await?;
    can_modify_resource(actor, &target.user_id)?;

    if !repo.delete(user_id).await? {
        return Err(BoardError::NotFound("user".to_string()));
    }

    info!(user_id = %user_id, actor = %actor.user_id, "Account deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registration::{register, register_with_role, RegistrationRequest};
    use crate::auth::verify_password;
    use crate::db::Database;

    async fn setup() -> (Database, User, User, User) {
        let db = Database::open_in_memory().await.unwrap();
        let alice = register(
            db.pool(),
            &RegistrationRequest::new("alice", "Password123", "Alice"),
        )
        .await
        .unwrap();
        let bob = register(
            db.pool(),
            &RegistrationRequest::new("bob", "Password123", "Bob"),
        )
        .await
        .unwrap();
        let admin = register_with_role(
            db.pool(),
            &RegistrationRequest::new("root", "Password123", "Root"),
            Role::Admin,
        )
        .await
        .unwrap();
        (db, alice, bob, admin)
    }

    #[tokio::test]
    async fn test_get_profile() {
        let (db, ..) = setup().await;

        let profile = get_profile(db.pool(), "alice").await.unwrap();
        assert_eq!(profile.user_id, "alice");
        assert_eq!(profile.nickname, "Alice");
        assert_eq!(profile.role, Role::Member);

        assert!(matches!(
            get_profile(db.pool(), "nobody").await,
            Err(BoardError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_own_profile() {
        let (db, alice, ..) = setup().await;

        let updated = update_profile(
            db.pool(),
            &alice,
            "alice",
            &ProfileUpdateRequest::new("NewPassword1", "Ally"),
        )
        .await
        .unwrap();

        assert_eq!(updated.nickname, "Ally");
        assert!(verify_password("NewPassword1", &updated.password).is_ok());
        assert!(verify_password("Password123", &updated.password).is_err());
    }

    #[tokio::test]
    async fn test_update_other_profile_forbidden() {
        let (db, alice, bob, _) = setup().await;

        let result = update_profile(
            db.pool(),
            &bob,
            "alice",
            &ProfileUpdateRequest::new("NewPassword1", "Hacked"),
        )
        .await;
        assert!(matches!(result, Err(BoardError::Permission(_))));

        let unchanged = get_profile(db.pool(), &alice.user_id).await.unwrap();
        assert_eq!(unchanged.nickname, "Alice");
    }

    #[tokio::test]
    async fn test_admin_updates_any_profile() {
        let (db, _, _, admin) = setup().await;

        let updated = update_profile(
            db.pool(),
            &admin,
            "alice",
            &ProfileUpdateRequest::new("ResetPass1", "Alice"),
        )
        .await
        .unwrap();
        assert!(verify_password("ResetPass1", &updated.password).is_ok());
    }

    #[tokio::test]
    async fn test_update_profile_policy() {
        let (db, alice, ..) = setup().await;

        let result = update_profile(
            db.pool(),
            &alice,
            "alice",
            &ProfileUpdateRequest::new("lowercase1", "Alice"),
        )
        .await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_profile() {
        let (db, _, _, admin) = setup().await;

        let result = update_profile(
            db.pool(),
            &admin,
            "ghost",
            &ProfileUpdateRequest::new("Password123", "Ghost"),
        )
        .await;
        assert!(matches!(result, Err(BoardError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_account() {
        let (db, alice, bob, admin) = setup().await;

        assert!(matches!(
            delete_account(db.pool(), &bob, "alice").await,
            Err(BoardError::Permission(_))
        ));

        delete_account(db.pool(), &alice, "alice").await.unwrap();
        assert!(get_profile(db.pool(), "alice").await.is_err());

        delete_account(db.pool(), &admin, "bob").await.unwrap();
        assert!(matches!(
            delete_account(db.pool(), &admin, "bob").await,
            Err(BoardError::NotFound(_))
        ));
    }
}
