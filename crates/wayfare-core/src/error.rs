//! Error types for the trip-planning library.

use thiserror::Error;

/// Comprehensive error type for all store and validation operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Invalid input: malformed interval components, blank required fields,
    /// or scheduling violations.
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The targeted record no longer exists in the underlying source.
    #[error("Record with ID {id} not found")]
    NotFound { id: String },

    /// Transport or storage failure surfaced from the underlying data
    /// source, carrying the underlying cause for diagnostics.
    #[error("Data source error: {message}")]
    Source {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An in-flight operation was aborted before completion.
    #[error("Operation '{operation}' was cancelled before completion")]
    Cancelled { operation: String },

    /// The source variant does not implement this operation.
    #[error("Operation '{operation}' is not supported by this source")]
    Unsupported { operation: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Classification of a [`StoreError`], suitable for observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Source,
    Cancelled,
    Unsupported,
    Serialization,
}

/// The observable, clonable form of a failed operation.
///
/// The full [`StoreError`] owns a boxed cause and is returned to the direct
/// caller; the error channel carries this classification plus the rendered
/// message so any number of observers can display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StoreError> for OperationError {
    fn from(error: &StoreError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Builder for creating source errors with an underlying cause.
pub struct SourceErrorBuilder {
    message: String,
}

impl SourceErrorBuilder {
    /// Create a new source error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given cause.
    pub fn with_cause<E>(self, cause: E) -> StoreError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Source {
            message: self.message,
            source: Box::new(cause),
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StoreError {
        StoreError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StoreError {
    /// Creates a builder for source errors.
    pub fn source(message: impl Into<String>) -> SourceErrorBuilder {
        SourceErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a not-found error for any displayable identifier.
    pub fn not_found(id: impl ToString) -> Self {
        StoreError::NotFound { id: id.to_string() }
    }

    /// Creates a cancellation error for a named operation.
    pub fn cancelled(operation: impl Into<String>) -> Self {
        StoreError::Cancelled {
            operation: operation.into(),
        }
    }

    /// Creates an unsupported-operation error for a named operation.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        StoreError::Unsupported {
            operation: operation.into(),
        }
    }

    /// Classifies this error for observable state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Source { .. } => ErrorKind::Source,
            StoreError::Cancelled { .. } => ErrorKind::Cancelled,
            StoreError::Unsupported { .. } => ErrorKind::Unsupported,
            StoreError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

/// Extension trait for rusqlite Results to provide concise error mapping.
pub trait SqliteResultExt<T> {
    /// Map database errors into [`StoreError::Source`] with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> SqliteResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StoreError::source(message).with_cause(e))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
