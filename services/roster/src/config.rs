//! Service configuration
//!
//! Values are layered: built-in defaults, then an optional `roster.toml`
//! in the working directory, then `ROSTER_*` environment variables.

use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::models::Credential;

/// Roster service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: String,
    /// Directory holding `users.json` and `students.json`
    pub data_dir: PathBuf,
    /// Name of the cookie carrying the session token
    pub session_cookie: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Username of the credential seeded on first run
    pub admin_username: String,
    /// Password of the credential seeded on first run
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            data_dir: PathBuf::from("data"),
            session_cookie: "roster_session".to_string(),
            log_level: "info".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, `roster.toml` and the environment
    ///
    /// # Environment Variables
    /// - `ROSTER_BIND_ADDR` (default: "0.0.0.0:3000")
    /// - `ROSTER_DATA_DIR` (default: "data")
    /// - `ROSTER_SESSION_COOKIE` (default: "roster_session")
    /// - `ROSTER_LOG_LEVEL` (default: "info")
    /// - `ROSTER_ADMIN_USERNAME` / `ROSTER_ADMIN_PASSWORD` (default: "admin" / "password")
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("roster").required(false))
            .add_source(Environment::with_prefix("ROSTER"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Credential written to an absent `users` document
    pub fn default_credential(&self) -> Credential {
        Credential {
            id: 1,
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
        }
    }
}
