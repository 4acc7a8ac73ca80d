//! Route configuration for remediation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_contamination, generate_plan, recommend_technique, RemediationAppState,
};

/// Creates the remediation router.
///
/// Routes:
/// - `POST /v1/remediation/plan` - Ranked strategy plan for a budget tier
/// - `POST /v1/remediation/analyze` - Technique options for a contamination type
/// - `GET /v1/remediation/recommend?contamination_type=..&priority=..` - Best technique
pub fn remediation_router() -> Router<RemediationAppState> {
    Router::new()
        .route("/v1/remediation/plan", post(generate_plan))
        .route("/v1/remediation/analyze", post(analyze_contamination))
        .route("/v1/remediation/recommend", get(recommend_technique))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequestLimits;
    use crate::domain::remediation::{ContaminationAnalyzer, StrategyRanker};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        remediation_router().with_state(RemediationAppState::new(
            Arc::new(StrategyRanker::default()),
            Arc::new(ContaminationAnalyzer::default()),
            Arc::new(RequestLimits::default()),
        ))
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_json(uri: &str, body: &str) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get(uri: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn plan_body(tier: &str) -> String {
        format!(
            r#"{{
                "pollution_description": "Lead and cadmium in former foundry soil",
                "site_type": "contaminated_land",
                "location": "Katowice",
                "budget_tier": "{}"
            }}"#,
            tier
        )
    }

    #[tokio::test]
    async fn plan_for_low_tier() {
        let response = post_json("/v1/remediation/plan", &plan_body("low")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["strategies"].as_array().unwrap().len(), 3);
        assert_eq!(json["strategies"][0]["agent_type"], "hybrid_remediation");
        assert_eq!(json["recommended_order"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["total_timeline_days"], 300);
        assert_eq!(json["combined_cost"], 100000.0);
    }

    #[tokio::test]
    async fn plan_with_unknown_tier_is_bad_request() {
        let response = post_json("/v1/remediation/plan", &plan_body("LOW")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["details"]["field"], "budget_tier");
    }

    #[tokio::test]
    async fn analyze_heavy_metals() {
        let response = post_json(
            "/v1/remediation/analyze",
            r#"{"contamination_type": "heavy_metals"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["strategies"].as_array().unwrap().len(), 2);
        assert_eq!(json["strategies"][0]["technique"], "phytoremediation");
    }

    #[tokio::test]
    async fn recommend_by_cost() {
        let response =
            get("/v1/remediation/recommend?contamination_type=heavy_metals&priority=cost").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["recommended_technique"], "phytoremediation");
        assert_eq!(json["cost"], "Low");
        assert_eq!(json["rationale"], "Selected based on cost");
    }

    #[tokio::test]
    async fn recommend_without_options_is_not_found() {
        let response = get("/v1/remediation/recommend?contamination_type=radioactive").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = read_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn recommend_without_type_is_bad_request() {
        let response = get("/v1/remediation/recommend").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
