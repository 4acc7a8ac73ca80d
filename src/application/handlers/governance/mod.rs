//! Governance handlers.
//!
//! ## Commands
//! - Aggregating weighted votes on a policy
//! - Assessing stakeholder consensus across governance dimensions

mod aggregate_votes;
mod assess_consensus;

pub use aggregate_votes::{AggregateVotesCommand, AggregateVotesHandler, AggregateVotesResult};
pub use assess_consensus::{AssessConsensusCommand, AssessConsensusHandler, AssessConsensusResult};
