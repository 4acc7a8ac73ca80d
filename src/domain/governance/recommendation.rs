//! Categorical policy recommendation derived from score and consensus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate score must exceed this (with consensus) to approve.
pub const APPROVE_SCORE_THRESHOLD: f64 = 0.6;

/// Consensus must exceed this (with score) to approve.
pub const APPROVE_CONSENSUS_THRESHOLD: f64 = 0.6;

/// An aggregate score below this rejects.
pub const REJECT_SCORE_THRESHOLD: f64 = -0.4;

/// A consensus below this rejects.
pub const REJECT_CONSENSUS_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Approve,
    Reject,
    NeedsReview,
}

impl Recommendation {
    /// Applies the threshold rules in priority order; first match wins.
    pub fn from_scores(aggregate_score: f64, consensus: f64) -> Self {
        if aggregate_score > APPROVE_SCORE_THRESHOLD && consensus > APPROVE_CONSENSUS_THRESHOLD {
            Recommendation::Approve
        } else if aggregate_score < REJECT_SCORE_THRESHOLD || consensus < REJECT_CONSENSUS_THRESHOLD
        {
            Recommendation::Reject
        } else {
            Recommendation::NeedsReview
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "APPROVE",
            Recommendation::Reject => "REJECT",
            Recommendation::NeedsReview => "NEEDS_REVIEW",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_requires_both_above_threshold() {
        assert_eq!(Recommendation::from_scores(0.61, 0.61), Recommendation::Approve);
        assert_eq!(Recommendation::from_scores(0.9, 0.6), Recommendation::NeedsReview);
        assert_eq!(Recommendation::from_scores(0.6, 0.9), Recommendation::NeedsReview);
    }

    #[test]
    fn score_boundary_at_minus_point_four_is_not_rejected() {
        assert_eq!(Recommendation::from_scores(-0.4, 0.9), Recommendation::NeedsReview);
        assert_eq!(Recommendation::from_scores(-0.41, 0.9), Recommendation::Reject);
    }

    #[test]
    fn consensus_boundary_at_point_three_is_not_rejected() {
        assert_eq!(Recommendation::from_scores(0.0, 0.3), Recommendation::NeedsReview);
        assert_eq!(Recommendation::from_scores(0.0, 0.299), Recommendation::Reject);
    }

    #[test]
    fn high_score_with_low_consensus_is_rejected() {
        assert_eq!(Recommendation::from_scores(0.95, 0.2), Recommendation::Reject);
    }

    #[test]
    fn serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Recommendation::NeedsReview).unwrap(),
            "\"NEEDS_REVIEW\""
        );
        assert_eq!(Recommendation::Approve.to_string(), "APPROVE");
    }
}
