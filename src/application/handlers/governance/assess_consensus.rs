//! AssessConsensusHandler - Averages stakeholder ballots into a policy rating.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RequestLimits;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::governance::{ConsensusAssessment, StakeholderBallot, StakeholderConsensus};

#[derive(Debug, Clone)]
pub struct AssessConsensusCommand {
    pub ballots: Vec<StakeholderBallot>,
}

#[derive(Debug, Clone)]
pub struct AssessConsensusResult {
    pub assessment: ConsensusAssessment,
    pub timestamp: Timestamp,
}

pub struct AssessConsensusHandler {
    limits: Arc<RequestLimits>,
}

impl AssessConsensusHandler {
    pub fn new(limits: Arc<RequestLimits>) -> Self {
        Self { limits }
    }

    pub fn handle(&self, cmd: AssessConsensusCommand) -> Result<AssessConsensusResult, DomainError> {
        let assessment =
            ValidationError::require_count("ballots", cmd.ballots.len(), 0, self.limits.max_ballots)
                .and_then(|_| StakeholderConsensus::assess(&cmd.ballots))
                .map_err(|e| {
                    warn!(error = %e, "Rejected stakeholder ballots");
                    DomainError::from(e)
                })?;

        info!(
            ballots = cmd.ballots.len(),
            overall = assessment.consensus_scores.overall_consensus,
            key_concern = %assessment.key_concern,
            "Stakeholder consensus assessed"
        );

        Ok(AssessConsensusResult {
            assessment,
            timestamp: Timestamp::now(),
        })
    }
}
