//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod governance;
pub mod remediation;
