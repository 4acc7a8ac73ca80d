//! Stakeholder voters and the weight-sum invariant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Allowed deviation of the voter weight sum from 1.0, inclusive.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// Absorbs binary rounding so that sums like 0.5 + 0.49 sit on the boundary.
const WEIGHT_SUM_SLACK: f64 = 1e-9;

/// A stakeholder and its share of influence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterWeight {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weight in [0.0, 1.0].
    pub weight: f64,
}

impl VoterWeight {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            weight,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            weight,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty("voters.id", &self.id)?;
        ValidationError::require_in_range("voters.weight", self.weight, 0.0, 1.0)
    }
}

/// Validates the voter panel: non-empty, each voter valid, weights summing
/// to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
pub fn validate_voters(voters: &[VoterWeight]) -> Result<(), ValidationError> {
    if voters.is_empty() {
        return Err(ValidationError::empty_field("voters"));
    }
    for voter in voters {
        voter.validate()?;
    }

    let total: f64 = voters.iter().map(|v| v.weight).sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE + WEIGHT_SUM_SLACK {
        return Err(ValidationError::WeightSumMismatch {
            total,
            tolerance: WEIGHT_SUM_TOLERANCE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(weights: &[f64]) -> Vec<VoterWeight> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| VoterWeight::new(format!("voter_{}", i), *w))
            .collect()
    }

    #[test]
    fn exact_sum_is_accepted() {
        assert!(validate_voters(&panel(&[0.35, 0.30, 0.35])).is_ok());
    }

    #[test]
    fn sums_on_the_tolerance_boundary_are_accepted() {
        assert!(validate_voters(&panel(&[0.5, 0.49])).is_ok());
        assert!(validate_voters(&panel(&[0.5, 0.51])).is_ok());
        assert!(validate_voters(&panel(&[0.99])).is_ok());
        assert!(validate_voters(&panel(&[1.0, 0.01])).is_ok());
    }

    #[test]
    fn sums_beyond_tolerance_are_rejected() {
        for weights in [&[0.5, 0.48][..], &[0.5, 0.52][..], &[0.98][..]] {
            let err = validate_voters(&panel(weights)).unwrap_err();
            assert!(
                matches!(err, ValidationError::WeightSumMismatch { .. }),
                "expected weight sum mismatch for {:?}, got {:?}",
                weights,
                err
            );
        }
    }

    #[test]
    fn empty_panel_is_rejected() {
        assert_eq!(
            validate_voters(&[]).unwrap_err(),
            ValidationError::empty_field("voters")
        );
    }

    #[test]
    fn individual_weight_out_of_range_is_rejected() {
        let err = validate_voters(&panel(&[1.2, -0.2])).unwrap_err();
        assert_eq!(err.field(), "voters.weight");
    }

    #[test]
    fn voter_deserializes_without_name() {
        let voter: VoterWeight =
            serde_json::from_str(r#"{"id":"health_dept","weight":0.3}"#).unwrap();
        assert_eq!(voter, VoterWeight::new("health_dept", 0.3));
    }
}
