//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the case search engine, providing the error
//! taxonomy shared by validation, ingestion, reference lookups, and the API.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from various system components
//! - **Output**: Structured error types with context and error chains
//! - **Error Categories**: Validation, Reference, Ingestion, Configuration
//!
//! ## Key Features
//! - Validation failures always name the offending field
//! - Reference lookups distinguish "not found" from "empty but valid"
//! - Automatic conversion from common library errors
//! - Structured logging integration via `category()`
//!
//! ## Usage
//! ```rust
//! use lexi_case_search::errors::{Result, SearchError};
//!
//! fn check_state(state: &str) -> Result<()> {
//!     if state.is_empty() {
//!         return Err(SearchError::ValidationFailed {
//!             field: "state".to_string(),
//!             reason: "state must not be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for the case search engine
#[derive(Debug, Error)]
pub enum SearchError {
    /// A search request or configuration field failed validation.
    /// Always names the offending field so callers can surface it.
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// A reference lookup addressed an entity that does not exist.
    /// Distinct from an empty-but-valid result set.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A record from a data source failed an ingestion rule
    #[error("Invalid case record '{case_number}': rule '{rule}' failed: {details}")]
    InvalidRecord {
        case_number: String,
        rule: String,
        details: String,
    },

    /// A data file could not be read or parsed
    #[error("Failed to load data file {path}: {details}")]
    DataFile { path: String, details: String },

    /// The operation was cancelled before completion.
    ///
    /// The in-memory engine never produces this; it is reserved for
    /// source-backed deployments where an underlying fetch can be aborted.
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    /// Check if the error is worth retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SearchError::Cancelled | SearchError::Io(_))
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::ValidationFailed { .. } => "validation",
            SearchError::NotFound { .. } => "reference",
            SearchError::Config { .. } => "configuration",
            SearchError::InvalidRecord { .. } | SearchError::DataFile { .. } => "ingestion",
            SearchError::Cancelled => "cancelled",
            SearchError::Internal { .. }
            | SearchError::Io(_)
            | SearchError::Json(_)
            | SearchError::Toml(_) => "internal",
        }
    }

    /// Shorthand for a not-found reference lookup
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        SearchError::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

// Helper macro for the common validation pattern
#[macro_export]
macro_rules! validation_error {
    ($field:expr, $reason:expr) => {
        $crate::errors::SearchError::ValidationFailed {
            field: $field.to_string(),
            reason: $reason.to_string(),
        }
    };
}
