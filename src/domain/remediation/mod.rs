//! Remediation Module - Strategy ranking and contamination analysis.
//!
//! # Components
//!
//! - `BudgetTier` - low / medium / high
//! - `StrategyCatalog` - Immutable per-tier strategy table (built-in or YAML)
//! - `StrategyRanker` - Tier pricing, effectiveness ordering, totals
//! - `ContaminationAnalyzer` - Technique options per contamination type
//!
//! Strategies are static lookup data; nothing here models biology.

mod budget_tier;
mod catalog;
mod contamination;
mod ranker;
mod strategy;

pub use budget_tier::BudgetTier;
pub use catalog::{
    CatalogEntry, CatalogError, StrategyCatalog, TierTable, TierValues, MAX_TIMELINE_DAYS,
};
pub use contamination::{
    ContaminationAnalyzer, ContaminationType, CostLevel, RemediationTechnique, SelectionPriority,
    TechniqueOption,
};
pub use ranker::{RemediationPlan, StrategyRanker};
pub use strategy::{AgentType, Strategy};
