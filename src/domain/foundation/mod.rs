//! Foundation module - Shared domain primitives.
//!
//! Contains the timestamp value object and the error types that form the
//! vocabulary shared by the governance and remediation domains.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
