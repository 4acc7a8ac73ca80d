//! HTTP adapter for the governance module.
//!
//! # Endpoints
//!
//! - `POST /v1/governance/vote` - Aggregate weighted multi-vector votes
//! - `POST /v1/governance/consensus` - Assess stakeholder consensus

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::GovernanceAppState;
pub use routes::governance_router;
