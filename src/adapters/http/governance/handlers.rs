//! HTTP handlers for governance endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::governance::{AssessConsensusHandler, AggregateVotesHandler};
use crate::config::RequestLimits;

use super::dto::{ConsensusRequest, ConsensusResponse, GovernanceVoteRequest, GovernanceVoteResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for governance endpoints.
#[derive(Clone)]
pub struct GovernanceAppState {
    pub limits: Arc<RequestLimits>,
}

impl GovernanceAppState {
    pub fn new(limits: Arc<RequestLimits>) -> Self {
        Self { limits }
    }

    pub fn aggregate_votes_handler(&self) -> AggregateVotesHandler {
        AggregateVotesHandler::new(self.limits.clone())
    }

    pub fn assess_consensus_handler(&self) -> AssessConsensusHandler {
        AssessConsensusHandler::new(self.limits.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /v1/governance/vote - Aggregate weighted votes on a policy
pub async fn aggregate_votes(
    State(state): State<GovernanceAppState>,
    payload: Result<Json<GovernanceVoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let result = state.aggregate_votes_handler().handle(request.into())?;
    Ok(Json(GovernanceVoteResponse::from(result)))
}

/// POST /v1/governance/consensus - Assess stakeholder consensus
pub async fn assess_consensus(
    State(state): State<GovernanceAppState>,
    payload: Result<Json<ConsensusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let result = state.assess_consensus_handler().handle(request.into())?;
    Ok(Json(ConsensusResponse::from(result)))
}
