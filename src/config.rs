//! Configuration file structures for the scout bot.
//!
//! This module defines the configuration file format using YAML, loaded
//! through figment so any value can be overridden from the environment. The
//! configuration is split into two sections: Matrix account settings and
//! liveness responder settings.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Matrix Account Configuration
//! matrix:
//!   # Fully qualified Matrix user ID for the bot account
//!   user_id: "@scout:matrix.org"
//!
//!   # Matrix account password
//!   password: "secret-password"
//!
//! # Liveness Responder Configuration (optional)
//! liveness:
//!   host: "0.0.0.0"
//!   port: 8080
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the
//! `SCOUT_` prefix and `__` as the section separator. This is the way to keep
//! the account password out of the file:
//!
//! ```bash
//! export SCOUT_MATRIX__USER_ID="@scout:matrix.org"
//! export SCOUT_MATRIX__PASSWORD="secret-from-env"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the scout bot.
///
/// # Structure
///
/// The configuration is divided into two sections:
/// - [`Matrix`] - Matrix account credentials
/// - [`Liveness`] - Liveness responder bind settings, fully defaulted
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Matrix account configuration
    pub matrix: Matrix,
    /// Liveness responder configuration
    #[serde(default)]
    pub liveness: Liveness,
}

/// Matrix account configuration.
///
/// # YAML Section
///
/// ```yaml
/// matrix:
///   user_id: "@scout:matrix.org"
///   password: "your-password"
/// ```
#[derive(Debug, Deserialize)]
pub struct Matrix {
    /// Fully qualified Matrix user ID.
    ///
    /// The Matrix ID of the bot account in the format `@username:homeserver.com`.
    pub user_id: String,

    /// Matrix account password.
    ///
    /// Used for initial login. After successful authentication, the session
    /// is persisted and the bot can restore without re-authenticating.
    /// Supply it via `SCOUT_MATRIX__PASSWORD` to keep it out of the file.
    pub password: String,
}

/// Liveness responder configuration.
///
/// Both fields default to the conventional bind address `0.0.0.0:8080`, so
/// the whole section can be omitted.
///
/// # YAML Section
///
/// ```yaml
/// liveness:
///   host: "0.0.0.0"
///   port: 8080
/// ```
#[derive(Debug, Deserialize)]
pub struct Liveness {
    /// Address the liveness listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the liveness listener binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Liveness {
    fn default() -> Self {
        Liveness {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Loads the configuration from a YAML file with environment overrides.
    ///
    /// Values from `SCOUT_`-prefixed environment variables take precedence
    /// over the file, with `__` separating sections from keys
    /// (`SCOUT_MATRIX__PASSWORD` overrides `matrix.password`).
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a required value is
    /// missing from both the file and the environment.
    pub fn load(path: &str) -> Result<Config, anyhow::Error> {
        let config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("SCOUT_").split("__"))
            .extract()?;

        Ok(config)
    }
}
