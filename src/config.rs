//! Application configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable           | Default                     |
//! |--------------------|-----------------------------|
//! | `HOST`             | `0.0.0.0`                   |
//! | `PORT`             | `5000`                      |
//! | `MONGO_URI`        | `mongodb://localhost:27017` |
//! | `MONGO_DB`         | `movies`                    |
//! | `MONGO_COLLECTION` | `movies`                    |
//! | `MOVIE_STORE`      | `mongo`                     |
//! | `LOG_FORMAT`       | `text`                      |

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Which [`crate::persistence::MovieStore`] implementation to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB at `MONGO_URI`.
    Mongo,
    /// In-process store; data is lost on exit.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                key: "MOVIE_STORE",
                value: other.to_string(),
            }),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Top-level application configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,

    /// MongoDB connection string.
    pub mongo_uri: String,

    /// Database name, used when the URI does not name one.
    pub mongo_db: String,

    /// Collection holding the movie documents.
    pub mongo_collection: String,

    /// Store implementation.
    pub store_backend: StoreBackend,

    /// Log output format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `HOST`, `PORT` or
    /// `MOVIE_STORE` is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = parse_required(&lookup, "HOST", "0.0.0.0")?;
        let port: u16 = parse_required(&lookup, "PORT", "5000")?;

        let mongo_uri =
            lookup("MONGO_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string());
        let mongo_db = lookup("MONGO_DB").unwrap_or_else(|| "movies".to_string());
        let mongo_collection = lookup("MONGO_COLLECTION").unwrap_or_else(|| "movies".to_string());

        let store_backend = lookup("MOVIE_STORE")
            .as_deref()
            .unwrap_or("mongo")
            .parse()?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            mongo_uri,
            mongo_db,
            mongo_collection,
            store_backend,
            log_format,
        })
    }
}

/// Parses `key` as `T`, using `default` when the variable is unset.
/// A set-but-invalid value is an error rather than a silent fallback.
fn parse_required<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
