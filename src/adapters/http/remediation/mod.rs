//! HTTP adapter for the remediation module.
//!
//! # Endpoints
//!
//! - `POST /v1/remediation/plan` - Rank bioremediation strategies by budget tier
//! - `POST /v1/remediation/analyze` - List techniques for a contamination type
//! - `GET /v1/remediation/recommend` - Pick the best technique under a priority

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::RemediationAppState;
pub use routes::remediation_router;
