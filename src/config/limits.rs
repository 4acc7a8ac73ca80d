//! Request limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Size limits applied to incoming requests before they reach the domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    pub policy_id_min_len: usize,
    pub policy_id_max_len: usize,
    pub policy_description_max_len: usize,
    pub context_max_len: usize,
    pub max_voters: usize,
    pub max_vectors: usize,
    pub max_ballots: usize,
    pub pollution_description_min_len: usize,
    pub pollution_description_max_len: usize,
    pub location_min_len: usize,
    pub location_max_len: usize,
    pub max_deadline_months: u32,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            policy_id_min_len: 3,
            policy_id_max_len: 255,
            policy_description_max_len: 2000,
            context_max_len: 1000,
            max_voters: 50,
            max_vectors: 20,
            max_ballots: 50,
            pollution_description_min_len: 10,
            pollution_description_max_len: 2000,
            location_min_len: 2,
            location_max_len: 255,
            max_deadline_months: 36,
        }
    }
}

impl RequestLimits {
    /// Validate limit configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ranges = [
            ("policy_id", self.policy_id_min_len, self.policy_id_max_len),
            ("policy_description", 0, self.policy_description_max_len),
            ("context", 0, self.context_max_len),
            ("voters", 1, self.max_voters),
            ("vectors", 1, self.max_vectors),
            ("ballots", 1, self.max_ballots),
            (
                "pollution_description",
                self.pollution_description_min_len,
                self.pollution_description_max_len,
            ),
            ("location", self.location_min_len, self.location_max_len),
            ("deadline_months", 1, self.max_deadline_months as usize),
        ];

        for (name, min, max) in ranges {
            if max == 0 || min > max {
                return Err(ValidationError::InvalidLimit(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RequestLimits::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_is_invalid() {
        let limits = RequestLimits {
            location_min_len: 300,
            ..Default::default()
        };
        assert_eq!(limits.validate(), Err(ValidationError::InvalidLimit("location")));
    }

    #[test]
    fn zero_maximum_is_invalid() {
        let limits = RequestLimits {
            max_vectors: 0,
            ..Default::default()
        };
        assert_eq!(limits.validate(), Err(ValidationError::InvalidLimit("vectors")));
    }
}
