/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_search")]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,

    #[serde(default = "default_jwt_refresh_expiration_days")]
    pub jwt_refresh_expiration_days: u64,
}

/// Provider credentials and fan-out tuning. Providers whose
/// credentials are absent are skipped at startup; Mixcloud and Audius
/// need none and are controlled by their enabled flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    #[serde(default)]
    pub jamendo_client_id: Option<String>,

    #[serde(default = "default_true")]
    pub mixcloud_enabled: bool,

    #[serde(default = "default_true")]
    pub audius_enabled: bool,

    #[serde(default = "default_audius_app_name")]
    pub audius_app_name: String,

    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables, e.g. MUSE_SERVER__PORT.
        // The double underscore separates sections from field names so
        // fields with underscores (jwt_secret, database_url) parse.
        settings = settings.add_source(
            config::Environment::with_prefix("MUSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set MUSE_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.search.provider_timeout_secs == 0 {
            return Err(ServerError::Config(
                "search.provider_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/muse.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
        jwt_refresh_expiration_days: default_jwt_refresh_expiration_days(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

fn default_jwt_refresh_expiration_days() -> u64 {
    30
}

fn default_search() -> SearchSettings {
    SearchSettings {
        youtube_api_key: None,
        jamendo_client_id: None,
        mixcloud_enabled: default_true(),
        audius_enabled: default_true(),
        audius_app_name: default_audius_app_name(),
        provider_timeout_secs: default_provider_timeout_secs(),
    }
}

fn default_true() -> bool {
    true
}

fn default_audius_app_name() -> String {
    "muse".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            search: default_search(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_reach_nested_fields() {
        std::env::set_var("MUSE_AUTH__JWT_SECRET", "env-secret");
        std::env::set_var("MUSE_SERVER__PORT", "9999");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.auth.jwt_secret, "env-secret");
        assert_eq!(config.server.port, 9999);
        config.validate().unwrap();

        std::env::remove_var("MUSE_AUTH__JWT_SECRET");
        std::env::remove_var("MUSE_SERVER__PORT");
    }

    #[test]
    fn test_validate_requires_jwt_secret() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());
    }
}
