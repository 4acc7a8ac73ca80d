//! Voting vectors - named evaluation dimensions with bounded scores.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Lowest score a vector may carry.
pub const MIN_VECTOR_SCORE: f64 = -1.0;

/// Highest score a vector may carry.
pub const MAX_VECTOR_SCORE: f64 = 1.0;

/// One evaluation dimension of a policy (e.g. "environmental_impact").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingVector {
    pub name: String,
    /// Score in [-1.0, 1.0].
    pub score: f64,
    /// Optional relative weight in [0.0, 1.0].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl VotingVector {
    /// Creates an unweighted vector.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            weight: None,
        }
    }

    /// Creates a vector carrying its own weight.
    pub fn weighted(name: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score,
            weight: Some(weight),
        }
    }

    /// Weight used in the weighted mean; a missing weight counts as 1.0.
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// Validates name, score range and weight range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty("vectors.name", &self.name)?;
        ValidationError::require_in_range(
            "vectors.score",
            self.score,
            MIN_VECTOR_SCORE,
            MAX_VECTOR_SCORE,
        )?;
        if let Some(weight) = self.weight {
            ValidationError::require_in_range("vectors.weight", weight, 0.0, 1.0)?;
        }
        Ok(())
    }
}

/// Validates a full vector set: non-empty, each vector valid, names unique.
pub fn validate_vectors(vectors: &[VotingVector]) -> Result<(), ValidationError> {
    if vectors.is_empty() {
        return Err(ValidationError::empty_field("vectors"));
    }

    let mut seen = HashSet::with_capacity(vectors.len());
    for vector in vectors {
        vector.validate()?;
        if !seen.insert(vector.name.as_str()) {
            return Err(ValidationError::duplicate("vectors.name", vector.name.clone()));
        }
    }
    Ok(())
}
