//! Top-level router assembly.
//!
//! Merges the module routers and wraps them in the shared middleware stack:
//! request ids, tracing, CORS, timeout, gzip compression and panic recovery.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{RequestLimits, ServerConfig};
use crate::domain::remediation::{ContaminationAnalyzer, StrategyRanker};

use super::error::internal_error_response;
use super::governance::{governance_router, GovernanceAppState};
use super::health::health_router;
use super::remediation::{remediation_router, RemediationAppState};

/// Read-only services shared by every request.
#[derive(Clone, Default)]
pub struct AppServices {
    pub limits: Arc<RequestLimits>,
    pub ranker: Arc<StrategyRanker>,
    pub analyzer: Arc<ContaminationAnalyzer>,
}

impl AppServices {
    pub fn new(limits: RequestLimits, ranker: StrategyRanker, analyzer: ContaminationAnalyzer) -> Self {
        Self {
            limits: Arc::new(limits),
            ranker: Arc::new(ranker),
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Builds the complete application router.
pub fn app_router(services: AppServices, server: &ServerConfig) -> Router {
    let governance = GovernanceAppState::new(services.limits.clone());
    let remediation = RemediationAppState::new(
        services.ranker.clone(),
        services.analyzer.clone(),
        services.limits.clone(),
    );

    let routes = Router::new()
        .merge(health_router())
        .merge(governance_router().with_state(governance))
        .merge(remediation_router().with_state(remediation));

    with_middleware(routes, server)
}

/// Shared middleware stack. Panics inside handlers become a 500 with the
/// standard error body instead of a dropped connection.
fn with_middleware(routes: Router, server: &ServerConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(internal_error_response))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Permissive when no origins are configured; unparseable origins are skipped.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
