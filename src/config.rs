//! Configuration module for Postboard.

use serde::Deserialize;
use std::path::Path;

use crate::{BoardError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/postboard.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/postboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Web API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number for the API.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// JWT secret key (must be set).
    #[serde(default)]
    pub jwt_secret: String,
    /// JWT signing algorithm (HS256, HS384 or HS512).
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token validity in days.
    #[serde(default = "default_access_token_expire_days")]
    pub access_token_expire_days: u64,
    /// Require issued tokens to be on the session allow-list.
    #[serde(default = "default_enforce_allow_list")]
    pub enforce_allow_list: bool,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8000
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_days() -> u64 {
    1
}

fn default_enforce_allow_list() -> bool {
    true
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
            jwt_secret: String::new(),
            jwt_algorithm: default_jwt_algorithm(),
            access_token_expire_days: default_access_token_expire_days(),
            enforce_allow_list: default_enforce_allow_list(),
        }
    }
}

/// Administrator account created at startup if it does not exist yet.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Login ID of the administrator.
    pub user_id: String,
    /// Initial password (subject to the password policy).
    pub password: String,
    /// Display nickname.
    #[serde(default = "default_admin_nickname")]
    pub nickname: String,
}

fn default_admin_nickname() -> String {
    "admin".to_string()
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web API configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Optional administrator bootstrap.
    #[serde(default)]
    pub admin: Option<AdminConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `POSTBOARD_JWT_SECRET`: Override the JWT secret key
    /// - `POSTBOARD_DATABASE_PATH`: Override the database file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(jwt_secret) = std::env::var("POSTBOARD_JWT_SECRET") {
            if !jwt_secret.is_empty() {
                self.web.jwt_secret = jwt_secret;
            }
        }
        if let Ok(path) = std::env::var("POSTBOARD_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - JWT secret is not set
    /// - JWT algorithm is not an HMAC algorithm
    /// - Access token validity is zero days
    pub fn validate(&self) -> Result<()> {
        if self.web.jwt_secret.is_empty() {
            return Err(BoardError::Config(
                "jwt_secret is not set. \
                 Set it in config.toml or via POSTBOARD_JWT_SECRET environment variable."
                    .to_string(),
            ));
        }
        crate::auth::parse_algorithm(&self.web.jwt_algorithm)?;
        if self.web.access_token_expire_days == 0 {
            return Err(BoardError::Config(
                "access_token_expire_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
