// src/db/config.rs
//
// Where the store lives and how long to wait for it.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Path of the database file, or `:memory:`
pub const DB_PATH_ENV: &str = "DISH_CATALOG_DB";

/// Milliseconds to wait for the connection before reporting a connectivity error
pub const CONNECT_TIMEOUT_ENV: &str = "DISH_CATALOG_CONNECT_TIMEOUT_MS";

pub const IN_MEMORY_TARGET: &str = ":memory:";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    File(PathBuf),
    /// Private database that lives as long as its connection
    InMemory,
}

impl std::fmt::Display for StoreTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreTarget::File(path) => write!(f, "{}", path.display()),
            StoreTarget::InMemory => write!(f, "{}", IN_MEMORY_TARGET),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub target: StoreTarget,
    pub busy_timeout: Duration,
    pub connect_timeout: Duration,
}

impl StoreConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: StoreTarget::File(path.into()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            target: StoreTarget::InMemory,
            ..Self::file(PathBuf::new())
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Falls back to the per-user data directory when no path is given.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(DB_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(target) if target.trim() == IN_MEMORY_TARGET => Self::in_memory(),
            Some(path) => Self::file(path),
            None => Self::file(get_database_path()?),
        };

        if let Some(raw) = lookup(CONNECT_TIMEOUT_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|e| {
                AppError::Other(format!("Invalid {} '{}': {}", CONNECT_TIMEOUT_ENV, raw, e))
            })?;
            if millis == 0 {
                return Err(AppError::Other(format!(
                    "{} must be greater than zero",
                    CONNECT_TIMEOUT_ENV
                )));
            }
            config.connect_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

/// Default database file path
///
/// Path structure: {APP_DATA}/dish-catalog/dishes.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let catalog_dir = app_data_dir.join("dish-catalog");

    std::fs::create_dir_all(&catalog_dir)?;

    Ok(catalog_dir.join("dishes.db"))
}
