//! Governance Module - Multi-stakeholder vote aggregation.
//!
//! # Components
//!
//! - `VotingVector` / `VoterWeight` - Request-scoped vote inputs and their invariants
//! - `VoteAggregator` - Weighted score, consensus, recommendation, confidence
//! - `Recommendation` - APPROVE / REJECT / NEEDS_REVIEW thresholds
//! - `StakeholderConsensus` - Per-dimension averaging of stakeholder ballots
//!
//! All functions are pure and stateless.

mod aggregator;
mod explanation;
mod recommendation;
mod stakeholder;
mod vector;
mod voter;

pub use aggregator::{AggregationResult, VoteAggregator, MAX_CONFIDENCE};
pub use explanation::{explain, strongest, weakest, SupportBand};
pub use recommendation::{
    Recommendation, APPROVE_CONSENSUS_THRESHOLD, APPROVE_SCORE_THRESHOLD,
    REJECT_CONSENSUS_THRESHOLD, REJECT_SCORE_THRESHOLD,
};
pub use stakeholder::{
    ConsensusAssessment, DimensionScores, GovernanceDimension, PolicyRating, StakeholderBallot,
    StakeholderConsensus, NEUTRAL_SCORE,
};
pub use vector::{validate_vectors, VotingVector, MAX_VECTOR_SCORE, MIN_VECTOR_SCORE};
pub use voter::{validate_voters, VoterWeight, WEIGHT_SUM_TOLERANCE};
