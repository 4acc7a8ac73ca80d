//! Stakeholder consensus across the four fixed governance dimensions.
//!
//! Each stakeholder submits one ballot scoring environment, health, economy
//! and speed on a 0-1 scale. Ballots are averaged per dimension and overall,
//! and the overall average selects a policy rating.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Score assumed for an unscored dimension and for an empty ballot box.
pub const NEUTRAL_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernanceDimension {
    Environment,
    Health,
    Economy,
    Speed,
}

impl GovernanceDimension {
    /// All dimensions in tie-breaking order.
    pub const ALL: [GovernanceDimension; 4] = [
        GovernanceDimension::Environment,
        GovernanceDimension::Health,
        GovernanceDimension::Economy,
        GovernanceDimension::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GovernanceDimension::Environment => "environment",
            GovernanceDimension::Health => "health",
            GovernanceDimension::Economy => "economy",
            GovernanceDimension::Speed => "speed",
        }
    }
}

impl fmt::Display for GovernanceDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn neutral() -> f64 {
    NEUTRAL_SCORE
}

/// One stakeholder's score card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderBallot {
    pub stakeholder_id: String,
    #[serde(default = "neutral")]
    pub environment: f64,
    #[serde(default = "neutral")]
    pub health: f64,
    #[serde(default = "neutral")]
    pub economy: f64,
    #[serde(default = "neutral")]
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl StakeholderBallot {
    /// Creates a ballot with every dimension at the neutral score.
    pub fn neutral(stakeholder_id: impl Into<String>) -> Self {
        Self {
            stakeholder_id: stakeholder_id.into(),
            environment: NEUTRAL_SCORE,
            health: NEUTRAL_SCORE,
            economy: NEUTRAL_SCORE,
            speed: NEUTRAL_SCORE,
            rationale: None,
        }
    }

    pub fn with_scores(mut self, environment: f64, health: f64, economy: f64, speed: f64) -> Self {
        self.environment = environment;
        self.health = health;
        self.economy = economy;
        self.speed = speed;
        self
    }

    pub fn score(&self, dimension: GovernanceDimension) -> f64 {
        match dimension {
            GovernanceDimension::Environment => self.environment,
            GovernanceDimension::Health => self.health,
            GovernanceDimension::Economy => self.economy,
            GovernanceDimension::Speed => self.speed,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty("ballots.stakeholder_id", &self.stakeholder_id)?;
        for dimension in GovernanceDimension::ALL {
            ValidationError::require_in_range(
                &format!("ballots.{}", dimension),
                self.score(dimension),
                0.0,
                1.0,
            )?;
        }
        Ok(())
    }
}

/// Policy rating derived from the overall consensus.
///
/// The wire form is the space-separated label, e.g. `"STRONGLY RECOMMENDED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyRating {
    #[serde(rename = "STRONGLY RECOMMENDED")]
    StronglyRecommended,
    #[serde(rename = "RECOMMENDED")]
    Recommended,
    #[serde(rename = "REQUIRES REVISION")]
    RequiresRevision,
    #[serde(rename = "NOT RECOMMENDED")]
    NotRecommended,
}

impl PolicyRating {
    pub fn from_overall(overall: f64) -> Self {
        match overall {
            x if x >= 0.75 => PolicyRating::StronglyRecommended,
            x if x >= 0.65 => PolicyRating::Recommended,
            x if x >= 0.5 => PolicyRating::RequiresRevision,
            _ => PolicyRating::NotRecommended,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyRating::StronglyRecommended => "STRONGLY RECOMMENDED",
            PolicyRating::Recommended => "RECOMMENDED",
            PolicyRating::RequiresRevision => "REQUIRES REVISION",
            PolicyRating::NotRecommended => "NOT RECOMMENDED",
        }
    }
}

/// Per-dimension averages plus the overall average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub environment: f64,
    pub health: f64,
    pub economy: f64,
    pub speed: f64,
    pub overall_consensus: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: GovernanceDimension) -> f64 {
        match dimension {
            GovernanceDimension::Environment => self.environment,
            GovernanceDimension::Health => self.health,
            GovernanceDimension::Economy => self.economy,
            GovernanceDimension::Speed => self.speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusAssessment {
    pub recommendation: PolicyRating,
    pub consensus_scores: DimensionScores,
    pub key_concern: GovernanceDimension,
}

/// Stakeholder consensus functions.
pub struct StakeholderConsensus;

impl StakeholderConsensus {
    /// Averages ballots per dimension and overall.
    ///
    /// # Edge Cases
    /// - No ballots: every score is [`NEUTRAL_SCORE`]
    pub fn calculate(ballots: &[StakeholderBallot]) -> DimensionScores {
        if ballots.is_empty() {
            return DimensionScores {
                environment: NEUTRAL_SCORE,
                health: NEUTRAL_SCORE,
                economy: NEUTRAL_SCORE,
                speed: NEUTRAL_SCORE,
                overall_consensus: NEUTRAL_SCORE,
            };
        }

        let n = ballots.len() as f64;
        let dimension_mean =
            |d: GovernanceDimension| ballots.iter().map(|b| b.score(d)).sum::<f64>() / n;

        let environment = dimension_mean(GovernanceDimension::Environment);
        let health = dimension_mean(GovernanceDimension::Health);
        let economy = dimension_mean(GovernanceDimension::Economy);
        let speed = dimension_mean(GovernanceDimension::Speed);

        let all_scores: f64 = ballots
            .iter()
            .flat_map(|b| GovernanceDimension::ALL.map(|d| b.score(d)))
            .sum();

        DimensionScores {
            environment,
            health,
            economy,
            speed,
            overall_consensus: all_scores / (n * GovernanceDimension::ALL.len() as f64),
        }
    }

    /// Dimension with the lowest average; earlier dimensions win ties.
    pub fn key_concern(scores: &DimensionScores) -> GovernanceDimension {
        GovernanceDimension::ALL
            .into_iter()
            .fold(GovernanceDimension::Environment, |lowest, d| {
                if scores.get(d) < scores.get(lowest) {
                    d
                } else {
                    lowest
                }
            })
    }

    /// Validates ballots and produces the full assessment.
    pub fn assess(ballots: &[StakeholderBallot]) -> Result<ConsensusAssessment, ValidationError> {
        for ballot in ballots {
            ballot.validate()?;
        }

        let consensus_scores = Self::calculate(ballots);
        Ok(ConsensusAssessment {
            recommendation: PolicyRating::from_overall(consensus_scores.overall_consensus),
            key_concern: Self::key_concern(&consensus_scores),
            consensus_scores,
        })
    }
}
