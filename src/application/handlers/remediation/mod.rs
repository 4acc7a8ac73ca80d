//! Remediation handlers.
//!
//! ## Commands
//! - Generating a ranked remediation plan for a budget tier
//!
//! ## Queries
//! - Listing technique options for a contamination type
//! - Recommending the best technique under a selection priority

mod analyze_contamination;
mod generate_plan;

// Commands
pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler, GeneratePlanResult};

// Queries
pub use analyze_contamination::{
    AnalyzeContaminationHandler, AnalyzeContaminationQuery, ContaminationAnalysis,
    RecommendTechniqueHandler, RecommendTechniqueQuery, TechniqueRecommendation,
};
