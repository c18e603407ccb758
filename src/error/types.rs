// src/error/types.rs
use crate::codec::DecodeError;
use crate::domain::{DomainError, FilterError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The store could not be reached or refused the connection.
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// A write that should have touched one row did not.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Connectivity(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_error_is_connectivity() {
        let manager = r2d2_sqlite::SqliteConnectionManager::file("/nonexistent-dir/catalog.db");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .min_idle(Some(0))
            .connection_timeout(std::time::Duration::from_millis(100))
            .build(manager)
            .unwrap();

        let err: AppError = pool.get().unwrap_err().into();
        assert!(matches!(err, AppError::Connectivity(_)));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }
}
