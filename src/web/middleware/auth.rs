//! Bearer token extractors.
//!
//! The `Authorization` header may carry `Bearer <token>` (scheme matched
//! case-insensitively) or the bare token.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::db::User;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Pull the token out of the `Authorization` header.
///
/// Returns `None` when the header is absent, empty, not valid UTF-8 or
/// uses a scheme other than `Bearer`.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("bearer") {
        return None;
    }

    match value.split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            (!token.is_empty()).then(|| token.to_string())
        }
        Some(_) => None,
        None => Some(value.to_string()),
    }
}

/// Raw token from the header, not verified.
///
/// Used by logout, which must accept tokens that are already revoked.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_token(&parts.headers)
            .map(BearerToken)
            .ok_or_else(|| ApiError::unauthorized("Missing authorization"))
    }
}

/// Extractor for authenticated users.
///
/// Verifies the token signature and expiry, checks the allow-list when
/// it is enforced, and loads the user the token was issued for.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user, as currently stored.
    pub user: User,
    /// The presented token.
    pub token: String,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

        let user = state.sessions().validate(&token).await?;

        Ok(AuthUser { user, token })
    }
}
