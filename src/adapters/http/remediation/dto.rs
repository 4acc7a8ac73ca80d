//! HTTP DTOs for remediation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::remediation::{
    AnalyzeContaminationQuery, ContaminationAnalysis, GeneratePlanCommand, GeneratePlanResult,
    RecommendTechniqueQuery, TechniqueRecommendation,
};
use crate::domain::remediation::{
    ContaminationType, CostLevel, RemediationTechnique, Strategy, TechniqueOption,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to generate a remediation plan.
#[derive(Debug, Clone, Deserialize)]
pub struct RemediationRequest {
    pub pollution_description: String,
    /// e.g. wastewater_treatment_plant, contaminated_land
    pub site_type: String,
    pub location: String,
    /// low, medium or high
    pub budget_tier: String,
    #[serde(default)]
    pub deadline_months: Option<u32>,
}

impl From<RemediationRequest> for GeneratePlanCommand {
    fn from(request: RemediationRequest) -> Self {
        Self {
            pollution_description: request.pollution_description,
            site_type: request.site_type,
            location: request.location,
            budget_tier: request.budget_tier,
            deadline_months: request.deadline_months,
        }
    }
}

/// Request to list techniques for a contamination type.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub contamination_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AnalyzeRequest> for AnalyzeContaminationQuery {
    fn from(request: AnalyzeRequest) -> Self {
        Self {
            contamination_type: request.contamination_type,
            description: request.description,
        }
    }
}

/// Query string for technique recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    pub contamination_type: String,
    pub priority: Option<String>,
}

impl From<RecommendParams> for RecommendTechniqueQuery {
    fn from(params: RecommendParams) -> Self {
        Self {
            contamination_type: params.contamination_type,
            priority: params.priority,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Ranked remediation plan.
#[derive(Debug, Clone, Serialize)]
pub struct RemediationResponse {
    /// Strategies, most effective first.
    pub strategies: Vec<Strategy>,
    /// Indices of strategies in recommended order.
    pub recommended_order: Vec<usize>,
    pub total_timeline_days: u32,
    /// Combined cost in EUR.
    pub combined_cost: f64,
    pub timestamp: String,
}

impl From<GeneratePlanResult> for RemediationResponse {
    fn from(result: GeneratePlanResult) -> Self {
        Self {
            strategies: result.plan.strategies,
            recommended_order: result.plan.recommended_order,
            total_timeline_days: result.plan.total_timeline_days,
            combined_cost: result.plan.combined_cost,
            timestamp: result.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub contamination_type: ContaminationType,
    pub strategies: Vec<TechniqueOption>,
}

impl From<ContaminationAnalysis> for AnalyzeResponse {
    fn from(analysis: ContaminationAnalysis) -> Self {
        Self {
            contamination_type: analysis.contamination_type,
            strategies: analysis.strategies,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommended_technique: RemediationTechnique,
    pub effectiveness: f64,
    pub timeline: String,
    pub cost: CostLevel,
    pub rationale: String,
}

impl From<TechniqueRecommendation> for RecommendResponse {
    fn from(recommendation: TechniqueRecommendation) -> Self {
        let rationale = recommendation.rationale();
        let option = recommendation.option;
        Self {
            recommended_technique: option.technique,
            effectiveness: option.effectiveness,
            timeline: option.timeline,
            cost: option.cost,
            rationale,
        }
    }
}
