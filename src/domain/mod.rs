//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamp, errors)
//! - `governance` - Vote aggregation and stakeholder consensus
//! - `remediation` - Strategy ranking and contamination analysis

pub mod foundation;
pub mod governance;
pub mod remediation;
