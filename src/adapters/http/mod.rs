//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod error;
pub mod governance;
pub mod health;
pub mod remediation;
pub mod router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use governance::{governance_router, GovernanceAppState};
pub use health::health_router;
pub use remediation::{remediation_router, RemediationAppState};
pub use router::{app_router, AppServices};
