// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Invalid input
    Validation,

    /// Store reachable but the operation failed
    Database,

    /// Store unreachable
    Connectivity,

    /// Malformed exchange record
    InvalidRecord,

    /// Search pattern does not compile
    InvalidSearch,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Persistence(message) => {
                error!("Persistence error: {}", message);
                Self::new(
                    ErrorType::Database,
                    "Failed to save dish to the database.",
                    None,
                )
            }

            AppError::Connectivity(message) => {
                error!("Connectivity error: {}", message);
                Self::new(ErrorType::Connectivity, "Database connection failed", None)
            }

            AppError::Decode(decode_error) => Self::new(
                ErrorType::InvalidRecord,
                "Invalid dish data line",
                Some(decode_error.to_string()),
            ),

            AppError::Filter(filter_error) => Self::new(
                ErrorType::InvalidSearch,
                "Invalid search pattern.",
                Some(filter_error.to_string()),
            ),

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::new(ErrorType::Internal, &message, None)
            }
        }
    }

    fn new(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }

    /// Serialized form handed to the UI
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T, E> ToErrorResponse<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e.into()).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_domain_error_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::MissingField {
            field: "name",
        }));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.details.as_deref(), Some("name is required"));
    }

    #[test]
    fn test_connectivity_is_distinct_from_not_found() {
        let error = ErrorResponse::from_app_error(AppError::Connectivity("refused".into()));
        assert_eq!(error.error_type, ErrorType::Connectivity);
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_serialization() {
        let json = ErrorResponse::from_app_error(AppError::NotFound).to_json();
        assert!(json.contains("\"not_found\""));
        assert!(json.contains("Resource not found"));
    }

    #[test]
    fn test_to_error_response_accepts_domain_errors() {
        let result: Result<(), DomainError> = Err(DomainError::MissingIdentity);
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("\"validation\""));
    }
}
