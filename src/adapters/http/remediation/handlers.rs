//! HTTP handlers for remediation endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::handlers::remediation::{
    AnalyzeContaminationHandler, GeneratePlanHandler, RecommendTechniqueHandler,
};
use crate::config::RequestLimits;
use crate::domain::remediation::{ContaminationAnalyzer, StrategyRanker};

use super::dto::{
    AnalyzeRequest, AnalyzeResponse, RecommendParams, RecommendResponse, RemediationRequest,
    RemediationResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for remediation endpoints.
#[derive(Clone)]
pub struct RemediationAppState {
    pub ranker: Arc<StrategyRanker>,
    pub analyzer: Arc<ContaminationAnalyzer>,
    pub limits: Arc<RequestLimits>,
}

impl RemediationAppState {
    pub fn new(
        ranker: Arc<StrategyRanker>,
        analyzer: Arc<ContaminationAnalyzer>,
        limits: Arc<RequestLimits>,
    ) -> Self {
        Self {
            ranker,
            analyzer,
            limits,
        }
    }

    pub fn generate_plan_handler(&self) -> GeneratePlanHandler {
        GeneratePlanHandler::new(self.ranker.clone(), self.limits.clone())
    }

    pub fn analyze_handler(&self) -> AnalyzeContaminationHandler {
        AnalyzeContaminationHandler::new(self.analyzer.clone())
    }

    pub fn recommend_handler(&self) -> RecommendTechniqueHandler {
        RecommendTechniqueHandler::new(self.analyzer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /v1/remediation/plan - Rank strategies for a budget tier
pub async fn generate_plan(
    State(state): State<RemediationAppState>,
    payload: Result<Json<RemediationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let result = state.generate_plan_handler().handle(request.into())?;
    Ok(Json(RemediationResponse::from(result)))
}

/// POST /v1/remediation/analyze - List techniques for a contamination type
pub async fn analyze_contamination(
    State(state): State<RemediationAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let analysis = state.analyze_handler().handle(request.into())?;
    Ok(Json(AnalyzeResponse::from(analysis)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/remediation/recommend - Best technique under a priority
pub async fn recommend_technique(
    State(state): State<RemediationAppState>,
    params: Result<Query<RecommendParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params
        .map_err(|e| ApiError::BadRequest(ErrorResponse::invalid_input(e.body_text())))?;
    let recommendation = state.recommend_handler().handle(params.into())?;
    Ok(Json(RecommendResponse::from(recommendation)))
}
