//! Typed error handling for dinewheel
//!
//! Two of these kinds are user-visible and non-fatal: a draft that fails
//! validation and a pick whose filters match nothing. Both leave the
//! collection unchanged and are surfaced to the collaborator as transient
//! notifications. The rest are infrastructure failures.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a draft or payload violates a field invariant
//! - [`StoreError`]: store operations on unknown ids
//! - [`SelectionError`]: no restaurant satisfies the filter criteria
//! - [`StorageError`]: persistence collaborator failures
//! - [`ConfigError`]: configuration parsing and IO

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for dinewheel
///
/// Each variant contains a more specific error type for that category.
#[derive(Debug)]
pub enum DinewheelError {
    /// Input validation errors
    Validation(ValidationError),

    /// Store operation errors
    Store(StoreError),

    /// Random-selection errors
    Selection(SelectionError),

    /// Persistence backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for DinewheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DinewheelError::Validation(e) => write!(f, "{}", e),
            DinewheelError::Store(e) => write!(f, "{}", e),
            DinewheelError::Selection(e) => write!(f, "{}", e),
            DinewheelError::Storage(e) => write!(f, "{}", e),
            DinewheelError::Config(e) => write!(f, "{}", e),
            DinewheelError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DinewheelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DinewheelError::Validation(e) => Some(e),
            DinewheelError::Store(e) => Some(e),
            DinewheelError::Selection(e) => Some(e),
            DinewheelError::Storage(e) => Some(e),
            DinewheelError::Config(e) => Some(e),
            DinewheelError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DinewheelError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DinewheelError::Validation(_) => StatusCode::BAD_REQUEST,
            DinewheelError::Store(e) => e.status_code(),
            DinewheelError::Selection(_) => StatusCode::NOT_FOUND,
            DinewheelError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DinewheelError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DinewheelError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DinewheelError::Validation(_) => "VALIDATION_ERROR",
            DinewheelError::Store(e) => e.error_code(),
            DinewheelError::Selection(_) => "NO_MATCH",
            DinewheelError::Storage(_) => "STORAGE_ERROR",
            DinewheelError::Config(_) => "CONFIG_ERROR",
            DinewheelError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DinewheelError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            DinewheelError::Store(StoreError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            DinewheelError::Selection(SelectionError::NoMatch { criteria }) => {
                serde_json::to_value(criteria)
                    .ok()
                    .map(|c| serde_json::json!({ "criteria": c }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for DinewheelError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for DinewheelError {
    fn from(err: ValidationError) -> Self {
        DinewheelError::Validation(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors related to store operations
///
/// An unknown id is a programmer-error case in practice (ids always come
/// from the current collection), but it is propagated rather than asserted.
#[derive(Debug)]
pub enum StoreError {
    /// No restaurant with this id exists in the collection
    NotFound { id: Uuid },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "restaurant with id '{}' not found", id)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "RESTAURANT_NOT_FOUND",
        }
    }
}

impl From<StoreError> for DinewheelError {
    fn from(err: StoreError) -> Self {
        DinewheelError::Store(err)
    }
}

// =============================================================================
// Selection Errors
// =============================================================================

/// Errors related to random selection
#[derive(Debug)]
pub enum SelectionError {
    /// No restaurant satisfies the filter criteria
    NoMatch {
        criteria: crate::core::criteria::FilterCriteria,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoMatch { .. } => {
                write!(f, "no restaurant matches the given filters")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<SelectionError> for DinewheelError {
    fn from(err: SelectionError) -> Self {
        DinewheelError::Selection(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the persistence collaborator
#[derive(Debug)]
pub enum StorageError {
    /// Backend operation failed
    Backend { backend: String, message: String },

    /// Failed to serialize/deserialize the collection
    Serialization { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Backend { backend, message } => {
                write!(f, "{} storage error: {}", backend, message)
            }
            StorageError::Serialization { message } => {
                write!(f, "Failed to serialize collection: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for DinewheelError {
    fn from(err: StorageError) -> Self {
        DinewheelError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for DinewheelError {
    fn from(err: ConfigError) -> Self {
        DinewheelError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for DinewheelError {
    fn from(err: std::io::Error) -> Self {
        DinewheelError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for DinewheelError {
    fn from(err: serde_yaml::Error) -> Self {
        DinewheelError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Persistence collaborators report failures as `anyhow::Error`
impl From<anyhow::Error> for DinewheelError {
    fn from(err: anyhow::Error) -> Self {
        DinewheelError::Storage(StorageError::Backend {
            backend: "collection".to_string(),
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for dinewheel operations
pub type DinewheelResult<T> = Result<T, DinewheelError>;

// =============================================================================
// Tests
// =============================================================================
