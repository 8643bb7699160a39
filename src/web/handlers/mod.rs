//! API handlers and shared application state.

pub mod comment;
pub mod post;
pub mod user;

pub use comment::*;
pub use post::*;
pub use user::*;

use crate::auth::{SessionManager, TokenService};
use crate::board::BoardService;
use crate::config::WebConfig;
use crate::db::Database;
use crate::Result;

/// Application state shared across handlers.
pub struct AppState {
    /// Database pool.
    pub db: Database,
    /// Token signing and verification.
    pub tokens: TokenService,
    /// Whether tokens must also be on the session allow-list.
    pub enforce_allow_list: bool,
}

impl AppState {
    /// Create a new application state that enforces the allow-list.
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self {
            db,
            tokens,
            enforce_allow_list: true,
        }
    }

    /// Create the application state from the web configuration.
    pub fn from_config(db: Database, config: &WebConfig) -> Result<Self> {
        let tokens = TokenService::from_config(config)?;
        Ok(Self::new(db, tokens).with_allow_list(config.enforce_allow_list))
    }

    /// Choose whether the allow-list is enforced.
    pub fn with_allow_list(mut self, enforce: bool) -> Self {
        self.enforce_allow_list = enforce;
        self
    }

    /// Session manager bound to this state.
    pub fn sessions(&self) -> SessionManager<'_> {
        SessionManager::new(self.db.pool(), &self.tokens)
            .enforce_allow_list(self.enforce_allow_list)
    }

    /// Board service bound to this state.
    pub fn board(&self) -> BoardService<'_> {
        BoardService::new(&self.db)
    }
}
