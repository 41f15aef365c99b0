use std::fmt;
use crate::config::{ConfigError, EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://scorekeeper.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
/// Upper bound for token lifetime: one year
const MAX_JWT_EXPIRATION_MINUTES: i64 = 525_600;

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    jwt_expiration_minutes: Option<i64>,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment source
    ///
    /// Unset values fall back to defaults; set but unparsable values are errors.
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let server_host = env
            .get_var("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match env.get_var("PORT") {
            Some(value) => Self::parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        let jwt_expiration_minutes = match env.get_var("JWT_EXPIRATION_MINUTES") {
            Some(value) if !value.is_empty() => Some(Self::parse_expiration(&value)?),
            _ => None,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            jwt_expiration_minutes,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    fn parse_port(value: &str) -> Result<u16, ConfigError> {
        match value.trim().parse::<u16>() {
            Ok(0) => Err(ConfigError::invalid_setting("PORT", "port must be between 1 and 65535")),
            Ok(port) => Ok(port),
            Err(e) => Err(ConfigError::invalid_setting("PORT", format!("{}: {}", value, e))),
        }
    }

    fn parse_expiration(value: &str) -> Result<i64, ConfigError> {
        let minutes = value.trim().parse::<i64>().map_err(|e| {
            ConfigError::invalid_setting("JWT_EXPIRATION_MINUTES", format!("{}: {}", value, e))
        })?;

        if minutes <= 0 {
            return Err(ConfigError::invalid_setting(
                "JWT_EXPIRATION_MINUTES",
                "must be a positive number of minutes",
            ));
        }

        if minutes > MAX_JWT_EXPIRATION_MINUTES {
            return Err(ConfigError::invalid_setting(
                "JWT_EXPIRATION_MINUTES",
                format!("must be at most {} minutes", MAX_JWT_EXPIRATION_MINUTES),
            ));
        }

        Ok(minutes)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Token lifetime in minutes; `None` means issued tokens never expire
    pub fn jwt_expiration_minutes(&self) -> Option<i64> {
        self.jwt_expiration_minutes
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
