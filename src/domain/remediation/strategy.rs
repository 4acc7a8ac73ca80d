//! Remediation strategy value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of organisms a strategy relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    FungalRemediation,
    BacterialConsortium,
    CrisprRemediation,
    HybridRemediation,
}

impl AgentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::FungalRemediation => "fungal_remediation",
            AgentType::BacterialConsortium => "bacterial_consortium",
            AgentType::CrisprRemediation => "crispr_remediation",
            AgentType::HybridRemediation => "hybrid_remediation",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy priced and scored for one budget tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub agent_type: AgentType,
    pub name: String,
    /// Effectiveness in [0, 1].
    pub effectiveness: f64,
    pub timeline_days: u32,
    /// Estimated cost in EUR.
    pub cost_estimate: f64,
    #[serde(default)]
    pub risks: Vec<String>,
    pub explanation: String,
    #[serde(default)]
    pub implementation_steps: Vec<String>,
}
