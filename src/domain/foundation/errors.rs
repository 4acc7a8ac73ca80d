//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Invariant violations detected while building or checking domain inputs.
///
/// Every variant names the field it concerns so callers can report it back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must have between {min} and {max} characters, got {actual}")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must contain between {min} and {max} items, got {actual}")]
    InvalidCount {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Voter weights must sum to 1.0 (±{tolerance}), got {total}")]
    WeightSumMismatch { total: f64, tolerance: f64 },

    #[error("Field '{field}' contains duplicate value '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has unrecognized value '{value}', expected one of: {expected}")]
    UnknownVariant {
        field: String,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a string length validation error.
    pub fn invalid_length(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::InvalidLength {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a collection size validation error.
    pub fn invalid_count(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::InvalidCount {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unrecognized enum value error.
    pub fn unknown_variant(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidCount { field, .. }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::UnknownVariant { field, .. } => field,
            ValidationError::WeightSumMismatch { .. } => "voters",
        }
    }

    /// Checks that a string is non-blank.
    pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        Ok(())
    }

    /// Checks that a value lies within `[min, max]`.
    ///
    /// NaN never lies within range.
    pub fn require_in_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
        if !(min..=max).contains(&value) {
            return Err(ValidationError::out_of_range(field, min, max, value));
        }
        Ok(())
    }

    /// Checks that a string's character count lies within `[min, max]`.
    pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
        let actual = value.chars().count();
        if actual < min || actual > max {
            return Err(ValidationError::invalid_length(field, min, max, actual));
        }
        Ok(())
    }

    /// Checks that a collection size lies within `[min, max]`.
    pub fn require_count(field: &str, actual: usize, min: usize, max: usize) -> Result<(), ValidationError> {
        if actual < min || actual > max {
            return Err(ValidationError::invalid_count(field, min, max, actual));
        }
        Ok(())
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidInput,

    // Lookup errors
    NotFound,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::NotFound => "NOT_FOUND",
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

    /// Creates an invalid input error for a specific field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message).with_detail("field", field.into())
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if the caller supplied bad input.
    pub fn is_invalid_input(&self) -> bool {
        self.code == ErrorCode::InvalidInput
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        DomainError::invalid_input(error.field().to_string(), error.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
