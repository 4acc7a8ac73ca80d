//! Strategy catalog - the immutable table the ranker prices strategies from.
//!
//! The built-in catalog mirrors the four standard strategy families. A
//! catalog can also be read from YAML so deployments can tune values
//! without a rebuild:
//!
//! ```yaml
//! strategies:
//!   - agent_type: fungal_remediation
//!     name: Mycoremediation using Pleurotus & Trametes Species
//!     timeline_days: 90
//!     explanation: Fungal mycoremediation ...
//!     tiers:
//!       low: { effectiveness: 0.75, cost_estimate: 30000 }
//!       medium: { effectiveness: 0.85, cost_estimate: 50000 }
//!       high: { effectiveness: 0.92, cost_estimate: 80000 }
//! ```
//!
//! A strategy without an entry for a tier is not offered at that tier.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::{AgentType, BudgetTier, Strategy};

/// Longest timeline a single strategy may declare (ten years).
pub const MAX_TIMELINE_DAYS: u32 = 3650;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read strategy catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse strategy catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid strategy catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Effectiveness and cost of a strategy at one budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierValues {
    pub effectiveness: f64,
    pub cost_estimate: f64,
}

impl TierValues {
    pub const fn new(effectiveness: f64, cost_estimate: f64) -> Self {
        Self {
            effectiveness,
            cost_estimate,
        }
    }
}

/// Per-tier values; `None` means "not offered at this tier".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    #[serde(default)]
    pub low: Option<TierValues>,
    #[serde(default)]
    pub medium: Option<TierValues>,
    #[serde(default)]
    pub high: Option<TierValues>,
}

impl TierTable {
    pub fn get(&self, tier: BudgetTier) -> Option<TierValues> {
        match tier {
            BudgetTier::Low => self.low,
            BudgetTier::Medium => self.medium,
            BudgetTier::High => self.high,
        }
    }
}

/// One strategy family with its static description and tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub agent_type: AgentType,
    pub name: String,
    pub timeline_days: u32,
    #[serde(default)]
    pub risks: Vec<String>,
    pub explanation: String,
    #[serde(default)]
    pub implementation_steps: Vec<String>,
    pub tiers: TierTable,
}

impl CatalogEntry {
    /// Prices this entry for a tier, if it is offered there.
    pub fn at_tier(&self, tier: BudgetTier) -> Option<Strategy> {
        self.tiers.get(tier).map(|values| Strategy {
            agent_type: self.agent_type,
            name: self.name.clone(),
            effectiveness: values.effectiveness,
            timeline_days: self.timeline_days,
            cost_estimate: values.cost_estimate,
            risks: self.risks.clone(),
            explanation: self.explanation.clone(),
            implementation_steps: self.implementation_steps.clone(),
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_empty("strategies.name", &self.name)?;
        ValidationError::require_in_range(
            "strategies.timeline_days",
            f64::from(self.timeline_days),
            1.0,
            f64::from(MAX_TIMELINE_DAYS),
        )?;
        for tier in BudgetTier::ALL {
            if let Some(values) = self.tiers.get(tier) {
                ValidationError::require_in_range(
                    "strategies.tiers.effectiveness",
                    values.effectiveness,
                    0.0,
                    1.0,
                )?;
                ValidationError::require_in_range(
                    "strategies.tiers.cost_estimate",
                    values.cost_estimate,
                    0.0,
                    f64::MAX,
                )?;
            }
        }
        Ok(())
    }
}

/// Ordered strategy catalog. Declaration order breaks effectiveness ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyCatalog {
    strategies: Vec<CatalogEntry>,
}

impl StrategyCatalog {
    /// Builds a catalog after validating every entry.
    pub fn new(strategies: Vec<CatalogEntry>) -> Result<Self, ValidationError> {
        let catalog = Self { strategies };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: StrategyCatalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a YAML catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.strategies
    }

    /// Strategies offered at a tier, in declaration order.
    pub fn strategies_for(&self, tier: BudgetTier) -> Vec<Strategy> {
        self.strategies
            .iter()
            .filter_map(|entry| entry.at_tier(tier))
            .collect()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.strategies.is_empty() {
            return Err(ValidationError::empty_field("strategies"));
        }
        self.strategies.iter().try_for_each(CatalogEntry::validate)
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self {
            strategies: vec![fungal(), bacterial(), crispr(), hybrid()],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fungal() -> CatalogEntry {
    CatalogEntry {
        agent_type: AgentType::FungalRemediation,
        name: "Mycoremediation using Pleurotus & Trametes Species".to_string(),
        timeline_days: 90,
        risks: strings(&["Seasonal sensitivity", "Maintenance", "Ecosystem impacts"]),
        explanation: "Fungal mycoremediation uses saprophytic fungi to break down heavy metals \
                      and organic contaminants. Cost-effective for large surface areas."
            .to_string(),
        implementation_steps: strings(&[
            "Site assessment and soil analysis",
            "Fungal inoculum cultivation",
            "Inoculum application",
            "Monitoring and maintenance",
            "Effectiveness verification",
        ]),
        tiers: TierTable {
            low: Some(TierValues::new(0.75, 30_000.0)),
            medium: Some(TierValues::new(0.85, 50_000.0)),
            high: Some(TierValues::new(0.92, 80_000.0)),
        },
    }
}

fn bacterial() -> CatalogEntry {
    CatalogEntry {
        agent_type: AgentType::BacterialConsortium,
        name: "Nitrifying & Denitrifying Bacterial Consortium".to_string(),
        timeline_days: 60,
        risks: strings(&["pH optimization", "Nutrient balance", "Temperature control"]),
        explanation: "Bacterial bioremediation uses engineered microbial consortia. Ideal for \
                      nitrogen-rich wastewater with rapid results."
            .to_string(),
        implementation_steps: strings(&[
            "Biofilm reactor setup",
            "Bacterial inoculation",
            "Nutrient dosing optimization",
            "Continuous operation and monitoring",
            "Effluent quality verification",
        ]),
        tiers: TierTable {
            low: Some(TierValues::new(0.70, 25_000.0)),
            medium: Some(TierValues::new(0.78, 40_000.0)),
            high: Some(TierValues::new(0.88, 65_000.0)),
        },
    }
}

fn crispr() -> CatalogEntry {
    CatalogEntry {
        agent_type: AgentType::CrisprRemediation,
        name: "CRISPR-Engineered Heavy Metal Bioaccumulators".to_string(),
        timeline_days: 120,
        risks: strings(&[
            "Regulatory approval",
            "Bioconfinement",
            "Public acceptance",
            "GMO protocols",
        ]),
        explanation: "Advanced CRISPR gene editing creates organisms optimized for specific \
                      contaminant bioaccumulation. Achieves 95%+ efficiency but requires strict \
                      regulatory approval."
            .to_string(),
        implementation_steps: strings(&[
            "Organism selection and genetic design",
            "Laboratory validation",
            "Regulatory application and approval",
            "Field deployment with biocontainment",
            "Long-term monitoring",
        ]),
        tiers: TierTable {
            low: None,
            medium: Some(TierValues::new(0.95, 120_000.0)),
            high: Some(TierValues::new(0.95, 120_000.0)),
        },
    }
}

fn hybrid() -> CatalogEntry {
    CatalogEntry {
        agent_type: AgentType::HybridRemediation,
        name: "Integrated Fungal-Bacterial-Plant Remediation".to_string(),
        timeline_days: 150,
        risks: strings(&["Complex monitoring", "Organism interaction", "Extended timeline"]),
        explanation: "Hybrid approach combines fungi, bacteria, and plants for synergistic \
                      remediation. Fungal mycelium transports contaminants to bacterial zones \
                      for metabolism. Highly effective but complex."
            .to_string(),
        implementation_steps: strings(&[
            "Comprehensive site analysis",
            "Organism selection and cultivation",
            "Integrated system deployment",
            "Multi-parameter monitoring",
            "Performance assessment and scaling",
        ]),
        tiers: TierTable {
            low: Some(TierValues::new(0.82, 45_000.0)),
            medium: Some(TierValues::new(0.90, 75_000.0)),
            high: Some(TierValues::new(0.97, 130_000.0)),
        },
    }
}
