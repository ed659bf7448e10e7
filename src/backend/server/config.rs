/**
 * Server Configuration
 *
 * Settings are read once at startup from two sources:
 *
 * 1. An optional TOML file named by `BLOG_CONFIG`, with `[server]`,
 *    `[database]` and `[auth]` sections
 * 2. Environment variables (after `.env` is loaded), which override the file
 *
 * # Environment Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `HOST` | `0.0.0.0` |
 * | `PORT` | `8080` |
 * | `DATABASE_URL` | composed from `DB_*` when `DB_HOST` is set, else none |
 * | `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` | `-`, `5432`, `postgres`, empty, `blog` |
 * | `DB_MAX_CONNECTIONS` | `100` |
 * | `JWT_SECRET` | development secret (logged as a warning) |
 * | `TOKEN_TTL_HOURS` | `24` |
 * | `BCRYPT_COST` | bcrypt's default cost |
 *
 * A value that fails to parse aborts startup with a [`ConfigError`].
 */

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const CONFIG_FILE_VAR: &str = "BLOG_CONFIG";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEV_JWT_SECRET: &str = "inkpost-development-secret-change-me";

/// Cost bounds accepted by bcrypt
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    BcryptCost(u32),
    #[error("token lifetime must be a positive number of hours, got {0}")]
    TokenTtl(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// `None` runs the server on the in-memory store
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseSettings {
                url: None,
                max_connections: DEFAULT_MAX_CONNECTIONS,
            },
            auth: AuthSettings {
                jwt_secret: DEV_JWT_SECRET.to_string(),
                token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
        }
    }
}

/// On-disk layout of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServer,
    pub database: FileDatabase,
    pub auth: FileAuth,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileServer {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileDatabase {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileAuth {
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: Option<i64>,
    pub bcrypt_cost: Option<u32>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

impl AppConfig {
    /// Load from `BLOG_CONFIG` (if set) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_FILE_VAR) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Some(FileConfig::from_path(Path::new(&path))?)
            }
            Err(_) => None,
        };

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup; the environment wins
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let host = env("HOST").or(file.server.host).unwrap_or(defaults.server.host);
        let port = match env("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => file.server.port.unwrap_or(defaults.server.port),
        };

        let url = match env("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(url),
            None => match compose_database_url(&env)? {
                Some(url) => Some(url),
                None => file.database.url,
            },
        };
        let max_connections = match env("DB_MAX_CONNECTIONS") {
            Some(value) => parse_var("DB_MAX_CONNECTIONS", value)?,
            None => file
                .database
                .max_connections
                .unwrap_or(defaults.database.max_connections),
        };

        let jwt_secret = match env("JWT_SECRET").or(file.auth.jwt_secret) {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set; using the development secret");
                defaults.auth.jwt_secret
            }
        };
        let token_ttl_hours = match env("TOKEN_TTL_HOURS") {
            Some(value) => parse_var("TOKEN_TTL_HOURS", value)?,
            None => file.auth.token_ttl_hours.unwrap_or(defaults.auth.token_ttl_hours),
        };
        if token_ttl_hours <= 0 {
            return Err(ConfigError::TokenTtl(token_ttl_hours));
        }
        let bcrypt_cost = match env("BCRYPT_COST") {
            Some(value) => parse_var("BCRYPT_COST", value)?,
            None => file.auth.bcrypt_cost.unwrap_or(defaults.auth.bcrypt_cost),
        };
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCost(bcrypt_cost));
        }

        Ok(Self {
            server: ServerSettings { host, port },
            database: DatabaseSettings { url, max_connections },
            auth: AuthSettings {
                jwt_secret,
                token_ttl_hours,
                bcrypt_cost,
            },
        })
    }
}

/// `postgres://` URL from the discrete `DB_*` variables, if `DB_HOST` is set
fn compose_database_url<F>(env: &F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(host) = env("DB_HOST").filter(|host| !host.trim().is_empty()) else {
        return Ok(None);
    };
    let port: u16 = match env("DB_PORT") {
        Some(value) => parse_var("DB_PORT", value)?,
        None => DEFAULT_DB_PORT,
    };
    let user = env("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = env("DB_PASSWORD").unwrap_or_default();
    let name = env("DB_NAME").unwrap_or_else(|| "blog".to_string());

    let credentials = if password.is_empty() {
        user
    } else {
        format!("{user}:{password}")
    };
    Ok(Some(format!("postgres://{credentials}@{host}:{port}/{name}")))
}
