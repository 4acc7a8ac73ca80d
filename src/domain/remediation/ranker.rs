//! Strategy Ranker - Prices the catalog for a budget tier and orders it by effectiveness.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{BudgetTier, Strategy, StrategyCatalog};

/// Ranked strategies with their summed timeline and cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationPlan {
    pub strategies: Vec<Strategy>,
    /// Indices into `strategies`, best first.
    pub recommended_order: Vec<usize>,
    pub total_timeline_days: u32,
    pub combined_cost: f64,
}

/// Ranks the strategies of an owned, immutable catalog.
#[derive(Debug, Clone, Default)]
pub struct StrategyRanker {
    catalog: StrategyCatalog,
}

impl StrategyRanker {
    pub fn new(catalog: StrategyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// Builds the plan for a tier.
    ///
    /// # Algorithm
    /// 1. Price every catalog entry offered at `tier`
    /// 2. Stable sort by effectiveness, highest first
    /// 3. Recommended order is the identity over the sorted list
    /// 4. Sum timelines and costs
    ///
    /// The pollution description and site type of a request do not change
    /// the plan; only the tier does.
    pub fn rank(&self, tier: BudgetTier) -> RemediationPlan {
        let mut strategies = self.catalog.strategies_for(tier);
        strategies.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));

        let recommended_order = (0..strategies.len()).collect();
        let total_timeline_days = strategies
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.timeline_days));
        let combined_cost = strategies.iter().map(|s| s.cost_estimate).sum();

        RemediationPlan {
            strategies,
            recommended_order,
            total_timeline_days,
            combined_cost,
        }
    }

    /// Parses the tier name, then ranks.
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownVariant` for an unrecognized tier.
    pub fn rank_by_name(&self, tier: &str) -> Result<RemediationPlan, ValidationError> {
        Ok(self.rank(tier.parse()?))
    }
}
