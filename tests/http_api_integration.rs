//! Integration tests for the assembled HTTP API.
//!
//! These tests drive the full router, middleware included, through
//! `tower::ServiceExt::oneshot`:
//! 1. Governance and remediation endpoints return the documented bodies
//! 2. Invalid input maps to 400 with the shared error body
//! 3. A catalog loaded from YAML replaces the built-in strategies

use std::io::Write;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use enviro_governance::adapters::http::{app_router, AppServices};
use enviro_governance::config::{RemediationConfig, RequestLimits, ServerConfig};
use enviro_governance::domain::remediation::{ContaminationAnalyzer, StrategyRanker};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    app_router(AppServices::default(), &ServerConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn vote_body() -> Value {
    json!({
        "policy_id": "city-eco-001",
        "policy_description": "Constructed wetland for stormwater treatment",
        "voters": [
            {"id": "env_agency", "name": "Environmental Agency", "weight": 0.35},
            {"id": "health_dept", "weight": 0.30},
            {"id": "city_council", "weight": 0.35}
        ],
        "vectors": [
            {"name": "environmental_impact", "score": 0.9},
            {"name": "health_benefit", "score": 0.85}
        ]
    })
}

fn plan_body(tier: &str) -> Value {
    json!({
        "pollution_description": "Hydrocarbon plume under a former fuel depot",
        "site_type": "contaminated_land",
        "location": "Antwerp",
        "budget_tier": tier,
        "deadline_months": 18
    })
}

// =============================================================================
// Governance
// =============================================================================

#[tokio::test]
async fn vote_aggregates_worked_example() {
    let (status, json) = send(app(), post("/v1/governance/vote", &vote_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["aggregate_score"].as_f64().unwrap() - 0.875).abs() < 1e-9);
    assert_eq!(json["voter_consensus"], 0.982);
    assert_eq!(json["recommendation"], "APPROVE");
    assert_eq!(json["vector_breakdown"]["health_benefit"], 0.85);
    assert!(json["explanation"]
        .as_str()
        .unwrap()
        .starts_with("Policy city-eco-001 analyzed across 2 dimensions."));
}

#[tokio::test]
async fn vote_rejects_out_of_range_score() {
    let mut body = vote_body();
    body["vectors"][0]["score"] = json!(1.5);

    let (status, json) = send(app(), post("/v1/governance/vote", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn vote_rejects_duplicate_vector_names() {
    let mut body = vote_body();
    body["vectors"][1]["name"] = json!("environmental_impact");

    let (status, _) = send(app(), post("/v1/governance/vote", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vote_rejects_empty_vectors() {
    let mut body = vote_body();
    body["vectors"] = json!([]);

    let (status, json) = send(app(), post("/v1/governance/vote", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"]["field"], "vectors");
}

#[tokio::test]
async fn vote_missing_field_is_bad_request() {
    let body = json!({"policy_id": "city-eco-001"});

    let (status, json) = send(app(), post("/v1/governance/vote", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn consensus_without_ballots_is_neutral() {
    let (status, json) = send(app(), post("/v1/governance/consensus", &json!({"ballots": []}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recommendation"], "REQUIRES REVISION");
    assert_eq!(json["consensus_scores"]["overall_consensus"], 0.5);
    assert_eq!(json["key_concern"], "environment");
}

// =============================================================================
// Remediation
// =============================================================================

#[tokio::test]
async fn plan_for_medium_tier_includes_crispr() {
    let (status, json) = send(app(), post("/v1/remediation/plan", &plan_body("medium"))).await;

    assert_eq!(status, StatusCode::OK);
    let agents: Vec<&str> = json["strategies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["agent_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        agents,
        vec![
            "crispr_remediation",
            "hybrid_remediation",
            "fungal_remediation",
            "bacterial_consortium"
        ]
    );
    assert_eq!(json["total_timeline_days"], 420);
    assert_eq!(json["combined_cost"], 285000.0);
}

#[tokio::test]
async fn plan_with_unknown_tier_is_bad_request() {
    let (status, json) = send(app(), post("/v1/remediation/plan", &plan_body("premium"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("low, medium, high"));
}

#[tokio::test]
async fn plan_uses_catalog_loaded_from_yaml() {
    let yaml = r#"
strategies:
  - agent_type: fungal_remediation
    name: Oyster mushroom mats
    timeline_days: 45
    explanation: Mycelium mats over the spill zone.
    tiers:
      low: { effectiveness: 0.6, cost_estimate: 12000 }
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = RemediationConfig {
        catalog_path: Some(file.path().to_string_lossy().into_owned()),
    };
    let services = AppServices::new(
        RequestLimits::default(),
        StrategyRanker::new(config.load_catalog().unwrap()),
        ContaminationAnalyzer::default(),
    );
    let app = app_router(services, &ServerConfig::default());

    let (status, json) = send(app, post("/v1/remediation/plan", &plan_body("low"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["strategies"].as_array().unwrap().len(), 1);
    assert_eq!(json["strategies"][0]["name"], "Oyster mushroom mats");
    assert_eq!(json["combined_cost"], 12000.0);
}

#[tokio::test]
async fn recommend_defaults_to_effectiveness() {
    let request = Request::builder()
        .uri("/v1/remediation/recommend?contamination_type=HEAVY_METALS")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recommended_technique"], "mycoremediation");
    assert_eq!(json["rationale"], "Selected based on effectiveness");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_is_healthy() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, json) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
