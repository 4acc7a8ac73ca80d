//! HTTP DTOs (Data Transfer Objects) for governance endpoints.
//!
//! These types define the JSON request/response structure for the governance API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::governance::{
    AggregateVotesCommand, AggregateVotesResult, AssessConsensusCommand, AssessConsensusResult,
};
use crate::domain::governance::{
    DimensionScores, GovernanceDimension, PolicyRating, Recommendation, StakeholderBallot,
    VoterWeight, VotingVector,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to aggregate the votes on a policy.
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceVoteRequest {
    /// Unique policy identifier.
    pub policy_id: String,
    #[serde(default)]
    pub policy_description: Option<String>,
    /// Weighted stakeholders; weights must sum to 1.0.
    pub voters: Vec<VoterWeight>,
    /// Scored evaluation dimensions.
    pub vectors: Vec<VotingVector>,
    /// Additional context.
    #[serde(default)]
    pub context: Option<String>,
}

impl From<GovernanceVoteRequest> for AggregateVotesCommand {
    fn from(request: GovernanceVoteRequest) -> Self {
        Self {
            policy_id: request.policy_id,
            policy_description: request.policy_description,
            voters: request.voters,
            vectors: request.vectors,
            context: request.context,
        }
    }
}

/// Request to assess stakeholder consensus.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsensusRequest {
    /// Missing dimension scores default to neutral.
    #[serde(default)]
    pub ballots: Vec<StakeholderBallot>,
}

impl From<ConsensusRequest> for AssessConsensusCommand {
    fn from(request: ConsensusRequest) -> Self {
        Self {
            ballots: request.ballots,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Aggregated voting result.
#[derive(Debug, Clone, Serialize)]
pub struct GovernanceVoteResponse {
    pub policy_id: String,
    /// Weighted aggregate score in [-1, 1].
    pub aggregate_score: f64,
    /// Score for each vector, keyed by name.
    pub vector_breakdown: BTreeMap<String, f64>,
    /// Consensus level in [0, 1].
    pub voter_consensus: f64,
    /// APPROVE, REJECT or NEEDS_REVIEW.
    pub recommendation: Recommendation,
    pub explanation: String,
    /// RFC 3339 time the result was produced.
    pub timestamp: String,
    /// Confidence in the recommendation.
    pub confidence: f64,
}

impl From<AggregateVotesResult> for GovernanceVoteResponse {
    fn from(result: AggregateVotesResult) -> Self {
        let aggregation = result.aggregation;
        Self {
            policy_id: aggregation.policy_id,
            aggregate_score: aggregation.aggregate_score,
            vector_breakdown: aggregation.vector_breakdown,
            voter_consensus: aggregation.voter_consensus,
            recommendation: aggregation.recommendation,
            explanation: aggregation.explanation,
            timestamp: result.timestamp.to_rfc3339(),
            confidence: aggregation.confidence,
        }
    }
}

/// Stakeholder consensus assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusResponse {
    pub recommendation: PolicyRating,
    pub consensus_scores: DimensionScores,
    pub key_concern: GovernanceDimension,
    pub timestamp: String,
}

impl From<AssessConsensusResult> for ConsensusResponse {
    fn from(result: AssessConsensusResult) -> Self {
        Self {
            recommendation: result.assessment.recommendation,
            consensus_scores: result.assessment.consensus_scores,
            key_concern: result.assessment.key_concern,
            timestamp: result.timestamp.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_request_deserializes_optional_fields() {
        let json = r#"{
            "policy_id": "city-eco-001",
            "voters": [{"id": "env_agency", "weight": 1.0}],
            "vectors": [{"name": "environmental_impact", "score": 0.9}]
        }"#;
        let request: GovernanceVoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.policy_description.is_none());
        assert!(request.context.is_none());
        assert_eq!(request.vectors[0].weight, None);
    }

    #[test]
    fn consensus_request_defaults_missing_scores() {
        let json = r#"{"ballots": [{"stakeholder_id": "farmers", "economy": 0.2}]}"#;
        let request: ConsensusRequest = serde_json::from_str(json).unwrap();
        let ballot = &request.ballots[0];
        assert_eq!(ballot.economy, 0.2);
        assert_eq!(ballot.environment, 0.5);
        assert_eq!(ballot.speed, 0.5);
    }

    #[test]
    fn recommendation_serializes_upper_snake() {
        let json = serde_json::to_value(Recommendation::NeedsReview).unwrap();
        assert_eq!(json, "NEEDS_REVIEW");
    }
}
