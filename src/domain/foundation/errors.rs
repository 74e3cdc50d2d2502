//! Error types shared across layers.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::domain::ahp::MatrixError;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ValidationFailed,
    SizeMismatch,

    // Business-rule rejection (not an input error)
    ConsistencyRejected,

    // Not found
    SessionNotFound,

    // Infrastructure errors
    CatalogUnavailable,
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SizeMismatch => "SIZE_MISMATCH",
            ErrorCode::ConsistencyRejected => "CONSISTENCY_REJECTED",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<MatrixError> for DomainError {
    fn from(err: MatrixError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            .with_detail("invariant", matrix_invariant_name(&err))
    }
}

fn matrix_invariant_name(err: &MatrixError) -> &'static str {
    match err {
        MatrixError::Empty | MatrixError::NotSquare { .. } => "shape",
        MatrixError::NonPositiveEntry { .. } => "positivity",
        MatrixError::OffScaleEntry { .. } => "saaty_scale",
        MatrixError::BrokenDiagonal { .. } => "diagonal",
        MatrixError::BrokenReciprocity { .. } => "reciprocity",
    }
}
