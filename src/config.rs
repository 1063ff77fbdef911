//! Service configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Read once at startup and carried in `AppState`. Every knob has a
//! `DEFAULT_*` constant so the server starts with no environment at all
//! (memory store, port 3000).

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FLIGHTS_COLLECTION: &str = "ucuslarr";
pub const DEFAULT_CONTACT_COLLECTION: &str = "iletisimformugonderimleri";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_STORE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown STORE_BACKEND: {0} (expected memory, http, or postgres)")]
    UnknownBackend(String),
    #[error("missing required env var {0}")]
    Missing(&'static str),
}

/// Which `CrudStore` implementation backs the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process store, optionally seeded from a JSON file.
    Memory { seed_file: Option<PathBuf> },
    /// Hosted CRUD REST service.
    Http { base_url: String, api_key: Option<String> },
    /// `PostgreSQL` table of JSONB records.
    Postgres { database_url: String, max_connections: u32 },
}

/// Names of the two collections consumed by the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub flights: String,
    pub contact: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self { flights: DEFAULT_FLIGHTS_COLLECTION.to_owned(), contact: DEFAULT_CONTACT_COLLECTION.to_owned() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub backend: StoreBackend,
    pub collections: Collections,
    pub timeouts: StoreTimeouts,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend: StoreBackend::Memory { seed_file: None },
            collections: Collections::default(),
            timeouts: StoreTimeouts {
                request_secs: DEFAULT_STORE_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_STORE_CONNECT_TIMEOUT_SECS,
            },
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `STORE_BACKEND`: `memory`, `http`, or `postgres`. When unset the
    ///   backend is inferred: `DATABASE_URL` selects postgres, `CRUD_BASE_URL`
    ///   selects http, otherwise memory.
    /// - `CRUD_BASE_URL`, `CRUD_API_KEY`: hosted store endpoint and bearer key
    /// - `DATABASE_URL`, `DB_MAX_CONNECTIONS`: postgres backend
    /// - `SEED_FILE`: JSON seed for the memory backend
    /// - `FLIGHTS_COLLECTION`, `CONTACT_COLLECTION`: collection ids
    /// - `STORE_REQUEST_TIMEOUT_SECS`, `STORE_CONNECT_TIMEOUT_SECS`
    /// - `STATIC_DIR`: directory served under `/assets`, default `./assets`
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend name or when the selected
    /// backend's connection variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = parse_backend(
            env_string("STORE_BACKEND").as_deref(),
            env_string("CRUD_BASE_URL"),
            env_string("DATABASE_URL"),
        )?;

        let backend = match backend {
            StoreBackend::Memory { .. } => StoreBackend::Memory { seed_file: env_string("SEED_FILE").map(PathBuf::from) },
            StoreBackend::Http { base_url, .. } => StoreBackend::Http { base_url, api_key: env_string("CRUD_API_KEY") },
            StoreBackend::Postgres { database_url, .. } => StoreBackend::Postgres {
                database_url,
                max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            },
        };

        let collections = Collections {
            flights: env_string("FLIGHTS_COLLECTION").unwrap_or_else(|| DEFAULT_FLIGHTS_COLLECTION.to_owned()),
            contact: env_string("CONTACT_COLLECTION").unwrap_or_else(|| DEFAULT_CONTACT_COLLECTION.to_owned()),
        };

        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT),
            backend,
            collections,
            timeouts: StoreTimeouts {
                request_secs: env_parse("STORE_REQUEST_TIMEOUT_SECS", DEFAULT_STORE_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("STORE_CONNECT_TIMEOUT_SECS", DEFAULT_STORE_CONNECT_TIMEOUT_SECS),
            },
            static_dir: env_string("STATIC_DIR").map_or_else(default_static_dir, PathBuf::from),
        })
    }
}

/// Stylesheet and other assets shipped alongside the crate.
fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn parse_backend(
    raw: Option<&str>,
    crud_base_url: Option<String>,
    database_url: Option<String>,
) -> Result<StoreBackend, ConfigError> {
    let kind = match raw {
        Some(kind) => kind.to_ascii_lowercase(),
        None if database_url.is_some() => "postgres".to_owned(),
        None if crud_base_url.is_some() => "http".to_owned(),
        None => "memory".to_owned(),
    };

    match kind.as_str() {
        "memory" => Ok(StoreBackend::Memory { seed_file: None }),
        "http" => {
            let base_url = crud_base_url.ok_or(ConfigError::Missing("CRUD_BASE_URL"))?;
            Ok(StoreBackend::Http { base_url: base_url.trim_end_matches('/').to_owned(), api_key: None })
        }
        "postgres" => {
            let database_url = database_url.ok_or(ConfigError::Missing("DATABASE_URL"))?;
            Ok(StoreBackend::Postgres { database_url, max_connections: DEFAULT_DB_MAX_CONNECTIONS })
        }
        _ => Err(ConfigError::UnknownBackend(kind)),
    }
}

/// Non-empty, trimmed env var value.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
