//! AggregateVotesHandler - Command handler for aggregating governance votes.
//!
//! Applies request limits, runs the vote aggregator and stamps the result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RequestLimits;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::governance::{AggregationResult, VoteAggregator, VoterWeight, VotingVector};

/// Command to aggregate the votes cast on one policy.
#[derive(Debug, Clone)]
pub struct AggregateVotesCommand {
    pub policy_id: String,
    pub policy_description: Option<String>,
    pub voters: Vec<VoterWeight>,
    pub vectors: Vec<VotingVector>,
    pub context: Option<String>,
}

/// Result of a successful aggregation.
#[derive(Debug, Clone)]
pub struct AggregateVotesResult {
    pub aggregation: AggregationResult,
    pub timestamp: Timestamp,
}

/// Handler for aggregating governance votes.
pub struct AggregateVotesHandler {
    limits: Arc<RequestLimits>,
}

impl AggregateVotesHandler {
    pub fn new(limits: Arc<RequestLimits>) -> Self {
        Self { limits }
    }

    pub fn handle(&self, cmd: AggregateVotesCommand) -> Result<AggregateVotesResult, DomainError> {
        info!(
            policy_id = %cmd.policy_id,
            voters = cmd.voters.len(),
            vectors = cmd.vectors.len(),
            "Aggregating votes"
        );

        let aggregation = self
            .check_limits(&cmd)
            .and_then(|_| VoteAggregator::aggregate(&cmd.policy_id, &cmd.voters, &cmd.vectors))
            .map_err(|e| {
                warn!(policy_id = %cmd.policy_id, error = %e, "Rejected governance vote");
                DomainError::from(e)
            })?;

        info!(
            policy_id = %aggregation.policy_id,
            aggregate_score = aggregation.aggregate_score,
            consensus = aggregation.voter_consensus,
            recommendation = %aggregation.recommendation,
            "Governance vote aggregated"
        );

        Ok(AggregateVotesResult {
            aggregation,
            timestamp: Timestamp::now(),
        })
    }

    fn check_limits(&self, cmd: &AggregateVotesCommand) -> Result<(), ValidationError> {
        let limits = &self.limits;
        ValidationError::require_length(
            "policy_id",
            &cmd.policy_id,
            limits.policy_id_min_len,
            limits.policy_id_max_len,
        )?;
        if let Some(description) = &cmd.policy_description {
            ValidationError::require_length(
                "policy_description",
                description,
                0,
                limits.policy_description_max_len,
            )?;
        }
        if let Some(context) = &cmd.context {
            ValidationError::require_length("context", context, 0, limits.context_max_len)?;
        }
        ValidationError::require_count("voters", cmd.voters.len(), 1, limits.max_voters)?;
        ValidationError::require_count("vectors", cmd.vectors.len(), 1, limits.max_vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::governance::Recommendation;

    fn handler() -> AggregateVotesHandler {
        AggregateVotesHandler::new(Arc::new(RequestLimits::default()))
    }

    fn command() -> AggregateVotesCommand {
        AggregateVotesCommand {
            policy_id: "city-eco-001".to_string(),
            policy_description: Some("Constructed wetland for stormwater".to_string()),
            voters: vec![
                VoterWeight::new("env_agency", 0.35),
                VoterWeight::new("health_dept", 0.30),
                VoterWeight::new("city_council", 0.35),
            ],
            vectors: vec![
                VotingVector::new("environmental_impact", 0.9),
                VotingVector::new("health_benefit", 0.85),
            ],
            context: None,
        }
    }

    #[test]
    fn aggregates_valid_command() {
        let result = handler().handle(command()).unwrap();
        assert_eq!(result.aggregation.policy_id, "city-eco-001");
        assert_eq!(result.aggregation.recommendation, Recommendation::Approve);
    }

    #[test]
    fn short_policy_id_is_invalid_input() {
        let mut cmd = command();
        cmd.policy_id = "ab".to_string();

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details.get("field"), Some(&"policy_id".to_string()));
    }

    #[test]
    fn too_many_vectors_is_invalid_input() {
        let mut cmd = command();
        cmd.vectors = (0..21)
            .map(|i| VotingVector::new(format!("v{}", i), 0.1))
            .collect();

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"vectors".to_string()));
    }

    #[test]
    fn long_context_is_invalid_input() {
        let mut cmd = command();
        cmd.context = Some("x".repeat(1001));

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"context".to_string()));
    }

    #[test]
    fn weight_sum_violation_is_invalid_input() {
        let mut cmd = command();
        cmd.voters = vec![VoterWeight::new("a", 0.6), VoterWeight::new("b", 0.42)];

        let err = handler().handle(cmd).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.message.contains("must sum to 1.0"));
    }
}
