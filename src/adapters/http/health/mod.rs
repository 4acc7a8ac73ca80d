//! HTTP adapter for service probes.

pub mod handlers;
pub mod routes;

pub use routes::health_router;
