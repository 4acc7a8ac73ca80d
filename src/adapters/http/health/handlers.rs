//! Liveness, readiness and index handlers.
//!
//! - `/health` - Liveness probe (is the service running?)
//! - `/ready` - Readiness probe (is the service ready for traffic?)
//!
//! The core holds no external connections, so readiness only reports which
//! analyzers are loaded.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::domain::foundation::Timestamp;

pub const SERVICE_NAME: &str = "Enviro Governance";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub services: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now().to_rfc3339(),
        version: VERSION,
    })
}

/// GET /ready
pub async fn ready() -> Json<ReadinessResponse> {
    let services = BTreeMap::from([
        ("governance", "operational"),
        ("remediation", "operational"),
    ]);

    Json(ReadinessResponse {
        status: "ready",
        timestamp: Timestamp::now().to_rfc3339(),
        services,
    })
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("health", "/health"),
        ("ready", "/ready"),
        ("governance_vote", "/v1/governance/vote"),
        ("governance_consensus", "/v1/governance/consensus"),
        ("remediation_plan", "/v1/remediation/plan"),
        ("remediation_analyze", "/v1/remediation/analyze"),
        ("remediation_recommend", "/v1/remediation/recommend"),
    ]);

    Json(IndexResponse {
        service: SERVICE_NAME,
        version: VERSION,
        endpoints,
    })
}
