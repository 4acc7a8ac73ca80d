//! Route configuration for probe and index endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{health, index, ready};

/// Creates the stateless health router.
///
/// Routes:
/// - `GET /` - Service name, version and endpoint index
/// - `GET /health` - Liveness probe
/// - `GET /ready` - Readiness probe
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
}
