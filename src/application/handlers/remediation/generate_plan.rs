//! GeneratePlanHandler - Command handler for ranking remediation strategies.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RequestLimits;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::remediation::{RemediationPlan, StrategyRanker};

/// Command to produce a remediation plan for a polluted site.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub pollution_description: String,
    pub site_type: String,
    pub location: String,
    pub budget_tier: String,
    pub deadline_months: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    pub plan: RemediationPlan,
    pub timestamp: Timestamp,
}

/// Handler for generating remediation plans.
///
/// Description, site type and location are validated but do not influence
/// ranking; only the budget tier selects strategies.
pub struct GeneratePlanHandler {
    ranker: Arc<StrategyRanker>,
    limits: Arc<RequestLimits>,
}

impl GeneratePlanHandler {
    pub fn new(ranker: Arc<StrategyRanker>, limits: Arc<RequestLimits>) -> Self {
        Self { ranker, limits }
    }

    pub fn handle(&self, cmd: GeneratePlanCommand) -> Result<GeneratePlanResult, DomainError> {
        let plan = self
            .check_limits(&cmd)
            .and_then(|_| self.ranker.rank_by_name(&cmd.budget_tier))
            .map_err(|e| {
                warn!(budget_tier = %cmd.budget_tier, error = %e, "Rejected remediation request");
                DomainError::from(e)
            })?;

        info!(
            location = %cmd.location,
            site_type = %cmd.site_type,
            budget_tier = %cmd.budget_tier,
            strategies = plan.strategies.len(),
            total_timeline_days = plan.total_timeline_days,
            combined_cost = plan.combined_cost,
            "Remediation plan generated"
        );

        Ok(GeneratePlanResult {
            plan,
            timestamp: Timestamp::now(),
        })
    }

    fn check_limits(&self, cmd: &GeneratePlanCommand) -> Result<(), ValidationError> {
        let limits = &self.limits;
        ValidationError::require_length(
            "pollution_description",
            &cmd.pollution_description,
            limits.pollution_description_min_len,
            limits.pollution_description_max_len,
        )?;
        ValidationError::require_non_empty("site_type", &cmd.site_type)?;
        ValidationError::require_length(
            "location",
            &cmd.location,
            limits.location_min_len,
            limits.location_max_len,
        )?;
        if let Some(months) = cmd.deadline_months {
            ValidationError::require_in_range(
                "deadline_months",
                f64::from(months),
                1.0,
                f64::from(limits.max_deadline_months),
            )?;
        }
        Ok(())
    }
}
