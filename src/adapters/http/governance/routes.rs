//! Route configuration for governance endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{aggregate_votes, assess_consensus, GovernanceAppState};

/// Creates the governance router.
///
/// Routes:
/// - `POST /v1/governance/vote` - Aggregate weighted votes on a policy
/// - `POST /v1/governance/consensus` - Assess stakeholder consensus
pub fn governance_router() -> Router<GovernanceAppState> {
    Router::new()
        .route("/v1/governance/vote", post(aggregate_votes))
        .route("/v1/governance/consensus", post(assess_consensus))
}
