//! Configuration types.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Skill service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Application id requests must be addressed to. `None` accepts any.
    pub app_id: Option<String>,
    /// Path to the local recipes database.
    pub db_path: PathBuf,
    /// Address the HTTP endpoint binds to.
    pub bind: IpAddr,
    /// Port the HTTP endpoint listens on.
    pub port: u16,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            db_path: PathBuf::from("./data/recipes.db"),
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl SkillConfig {
    /// Build the config from `RECIPE_ORGANIZER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let app_id = lookup("RECIPE_ORGANIZER_APP_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let db_path = lookup("RECIPE_ORGANIZER_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let bind = match lookup("RECIPE_ORGANIZER_BIND") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "RECIPE_ORGANIZER_BIND".to_string(),
                message: format!("{raw:?} is not an IP address: {e}"),
            })?,
            None => defaults.bind,
        };

        let port = match lookup("RECIPE_ORGANIZER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "RECIPE_ORGANIZER_PORT".to_string(),
                message: format!("{raw:?} is not a port number: {e}"),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            app_id,
            db_path,
            bind,
            port,
        })
    }

    /// Socket address for the HTTP listener.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
