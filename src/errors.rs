//! Error types for fleetcore
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for fleetcore operations
pub type Result<T> = std::result::Result<T, FleetError>;

/// Main error type for all fleetcore operations
#[derive(Debug, Error)]
pub enum FleetError {
    /// Malformed or empty input (e.g., an empty checklist)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Attempted status change violates the inspection state machine
    #[error("Illegal transition: {0}")]
    IllegalTransition(String),

    /// Referenced inspection or checklist item is absent from the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// No .fleetcore directory between the working directory and the filesystem root
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Stored or supplied JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl FleetError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            FleetError::InvalidInput(_) => "INVALID_INPUT",
            FleetError::IllegalTransition(_) => "ILLEGAL_TRANSITION",
            FleetError::NotFound(_) => "NOT_FOUND",
            FleetError::StoreNotFound(_) => "STORE_NOT_FOUND",
            FleetError::InvalidJson(_) => "INVALID_JSON",
            FleetError::ConfigError(_) => "CONFIG_ERROR",
            FleetError::Io(_) => "IO_ERROR",
            FleetError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        FleetError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &FleetError) -> i32 {
    match error {
        FleetError::InvalidInput(_) => 2,
        FleetError::IllegalTransition(_) => 3,
        FleetError::NotFound(_) => 4,
        _ => 1,
    }
}
