use chrono::{TimeDelta, Utc};
use dotenv::dotenv;
use std::env;
use thiserror::Error;
use tracing::{info, warn};

/// HS256 keys shorter than this are rejected at startup
pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Token signing settings (the `JwtSettings` section)
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_minutes: f64,
}

impl JwtSettings {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(lookup, "JwtSettings__Secret")?;
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                key: "JwtSettings__Secret",
                reason: format!("must be at least {MIN_SECRET_BYTES} bytes long"),
            });
        }

        let issuer = required(lookup, "JwtSettings__Issuer")?;
        let audience = required(lookup, "JwtSettings__Audience")?;

        let expiration_minutes = required(lookup, "JwtSettings__ExpirationMinutes")?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
            .ok_or_else(|| ConfigError::Invalid {
                key: "JwtSettings__ExpirationMinutes",
                reason: "must be a positive number of minutes".to_string(),
            })?;

        let settings = Self {
            secret,
            issuer,
            audience,
            expiration_minutes,
        };

        // un token che scade oltre la data massima rappresentabile non si può firmare
        let representable = settings
            .lifetime()
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .is_some();
        if !representable {
            return Err(ConfigError::Invalid {
                key: "JwtSettings__ExpirationMinutes",
                reason: "token lifetime is out of range".to_string(),
            });
        }

        Ok(settings)
    }

    /// Token lifetime rounded to milliseconds, `None` when it is not a
    /// positive, representable duration
    pub fn lifetime(&self) -> Option<TimeDelta> {
        let millis = (self.expiration_minutes * 60_000.0).round();
        if !millis.is_finite() || millis < 1.0 || millis >= i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_milliseconds(millis as i64)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub app_env: String,
    pub jwt: JwtSettings,
}

impl Config {
    /// Loads the configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            warn!("DATABASE_URL not set, using sqlite://catalog.db");
            "sqlite://catalog.db".to_string()
        });

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT",
                reason: "must be a number between 0-65535".to_string(),
            })?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::Invalid {
                key: "MAX_DB_CONNECTIONS",
                reason: "must be a positive number".to_string(),
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            app_env,
            jwt: JwtSettings::from_lookup(&lookup)?,
        })
    }

    /// Logs the configuration without the secret
    pub fn log_summary(&self) {
        info!(
            environment = %self.app_env,
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %self.database_url,
            max_db_connections = self.max_connections,
            jwt_issuer = %self.jwt.issuer,
            jwt_audience = %self.jwt.audience,
            jwt_expiration_minutes = self.jwt.expiration_minutes,
            "Server configuration loaded"
        );
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}
