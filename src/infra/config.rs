//! Centralized configuration (environment variables + `.env` + defaults).

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading config file: {0}")]
    DotEnv(#[from] dotenv::Error),

    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Where entity state is kept.
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    /// In-process store; state is lost on restart.
    Memory,
}

pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    /// Human-readable target for logs (never includes the password).
    pub target: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("target", &self.target)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

pub struct Config {
    pub port: u16,
    pub storage: StorageConfig,
    /// `tracing_subscriber::EnvFilter` directives, from `RUST_LOG`.
    pub log_filter: String,
}

impl Config {
    /// Loads `.env` (when present) into the environment, then reads the configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv()?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or("PORT", get("PORT"), 8080u16)?;
        let log_filter = get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let backend = get("STORAGE_BACKEND").unwrap_or_else(|| "postgres".to_string());
        let storage = match backend.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => StorageConfig::Postgres(database_config(&get)?),
            "memory" => StorageConfig::Memory,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: backend,
                    reason: "expected 'postgres' or 'memory'".to_string(),
                })
            }
        };

        Ok(Self {
            port,
            storage,
            log_filter,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn load_dotenv() -> Result<(), ConfigError> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn database_config<G>(get: &G) -> Result<DatabaseConfig, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5u32)?.max(1);

    // A full URL takes precedence over the individual parts.
    if let Some(url) = get("DATABASE_URL") {
        let connect_options = PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Invalid {
            name: "DATABASE_URL",
            value: "<redacted>".to_string(),
            reason: e.to_string(),
        })?;
        return Ok(DatabaseConfig {
            connect_options,
            max_connections,
            target: "DATABASE_URL".to_string(),
        });
    }

    let host = get("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?;
    let port = parse_or("DB_PORT", get("DB_PORT"), 5432u16)?;
    let user = get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
    let password = get("DB_PASSWORD").unwrap_or_default();
    let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
    let ssl_mode_raw = get("DB_SSLMODE").unwrap_or_else(|| "disable".to_string());
    let ssl_mode = PgSslMode::from_str(&ssl_mode_raw).map_err(|e| ConfigError::Invalid {
        name: "DB_SSLMODE",
        value: ssl_mode_raw.clone(),
        reason: e.to_string(),
    })?;

    let connect_options = PgConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&user)
        .password(&password)
        .database(&name)
        .ssl_mode(ssl_mode);

    Ok(DatabaseConfig {
        connect_options,
        max_connections,
        target: format!("{}:{}/{}", host, port, name),
    })
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
