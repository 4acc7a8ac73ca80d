//! Vote Aggregator - Weighted scoring, consensus measurement and recommendation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::explanation::explain;
use super::{validate_vectors, validate_voters, Recommendation, VoterWeight, VotingVector};

/// Confidence never exceeds this value.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Outcome of aggregating one policy's votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub policy_id: String,
    pub aggregate_score: f64,
    pub vector_breakdown: BTreeMap<String, f64>,
    pub voter_consensus: f64,
    pub recommendation: Recommendation,
    pub explanation: String,
    pub confidence: f64,
}

/// Stateless vote aggregation functions.
pub struct VoteAggregator;

impl VoteAggregator {
    /// Aggregates scored vectors into a single recommendation.
    ///
    /// # Errors
    /// Returns `ValidationError` when the voter panel or vector set breaks an
    /// invariant (empty, out of range, weight sum off, duplicate names).
    pub fn aggregate(
        policy_id: &str,
        voters: &[VoterWeight],
        vectors: &[VotingVector],
    ) -> Result<AggregationResult, ValidationError> {
        ValidationError::require_non_empty("policy_id", policy_id)?;
        validate_voters(voters)?;
        validate_vectors(vectors)?;

        let aggregate_score = Self::aggregate_score(vectors);
        let voter_consensus = Self::consensus(vectors);
        let recommendation = Recommendation::from_scores(aggregate_score, voter_consensus);

        Ok(AggregationResult {
            policy_id: policy_id.to_string(),
            aggregate_score,
            vector_breakdown: vectors
                .iter()
                .map(|v| (v.name.clone(), v.score))
                .collect(),
            voter_consensus,
            recommendation,
            explanation: explain(policy_id, vectors, aggregate_score, voter_consensus),
            confidence: Self::confidence(voter_consensus),
        })
    }

    /// Computes the aggregate score.
    ///
    /// # Algorithm
    /// - Any vector weighted: Σ(score × w) / Σ(w), missing weights count as 1.0
    /// - No vector weighted: arithmetic mean of scores
    ///
    /// # Edge Cases
    /// - Empty input: 0.0
    /// - All weights zero: 0.0
    pub fn aggregate_score(vectors: &[VotingVector]) -> f64 {
        if vectors.is_empty() {
            return 0.0;
        }

        let score = if vectors.iter().any(|v| v.weight.is_some()) {
            let total_weight: f64 = vectors.iter().map(VotingVector::effective_weight).sum();
            if total_weight <= 0.0 {
                return 0.0;
            }
            let weighted_sum: f64 = vectors
                .iter()
                .map(|v| v.score * v.effective_weight())
                .sum();
            weighted_sum / total_weight
        } else {
            mean(vectors.iter().map(|v| v.score))
        };

        score.clamp(-1.0, 1.0)
    }

    /// Computes consensus in [0, 1] from the spread of vector scores.
    ///
    /// # Algorithm
    /// `max(0, 1 - std / 2)` rounded to three decimals, with `std` the sample
    /// standard deviation. A spread of 2 (the full score range) maps to zero.
    ///
    /// # Edge Cases
    /// - Fewer than two vectors: 1.0
    /// - Mean score exactly 0: 1.0, even for maximally split scores
    pub fn consensus(vectors: &[VotingVector]) -> f64 {
        if vectors.len() < 2 {
            return 1.0;
        }

        let avg = mean(vectors.iter().map(|v| v.score));
        if avg == 0.0 {
            return 1.0;
        }

        let std = sample_std_dev(vectors.iter().map(|v| v.score), avg);
        round3((1.0 - std / 2.0).max(0.0))
    }

    /// Confidence grows with consensus and is capped at [`MAX_CONFIDENCE`].
    pub fn confidence(consensus: f64) -> f64 {
        (0.5 + consensus * 0.45).min(MAX_CONFIDENCE)
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

fn sample_std_dev(values: impl ExactSizeIterator<Item = f64>, mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let squared: f64 = values.map(|x| (x - mean).powi(2)).sum();
    (squared / (n - 1) as f64).sqrt()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
