//! Contamination analysis - technique options per contamination type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

macro_rules! wire_enum {
    ($name:ident, $field:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            /// Case-insensitive parse of the wire name.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        ValidationError::unknown_variant($field, s, &expected)
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(ContaminationType, "contamination_type", {
    HeavyMetals => "heavy_metals",
    OrganicPollutants => "organic_pollutants",
    Microplastics => "microplastics",
    Radioactive => "radioactive",
    PersistentOrganics => "persistent_organics",
});

wire_enum!(RemediationTechnique, "technique", {
    Phytoremediation => "phytoremediation",
    Mycoremediation => "mycoremediation",
    Bioremediation => "bioremediation",
    CrisprEngineering => "crispr_engineering",
    BacterialConsortium => "bacterial_consortium",
});

wire_enum!(SelectionPriority, "priority", {
    Effectiveness => "effectiveness",
    Cost => "cost",
});

impl Default for SelectionPriority {
    fn default() -> Self {
        SelectionPriority::Effectiveness
    }
}

/// Coarse cost level; ordering follows price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

/// A technique applicable to a contamination type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueOption {
    pub technique: RemediationTechnique,
    pub effectiveness: f64,
    pub timeline: String,
    pub cost: CostLevel,
    pub biodiversity_impact: String,
    pub risks: Vec<String>,
}

/// Looks up technique options by contamination type.
#[derive(Debug, Clone)]
pub struct ContaminationAnalyzer {
    table: Vec<(ContaminationType, Vec<TechniqueOption>)>,
}

impl ContaminationAnalyzer {
    pub fn new(table: Vec<(ContaminationType, Vec<TechniqueOption>)>) -> Self {
        Self { table }
    }

    /// Options known for a contamination type; empty when none are recorded.
    pub fn analyze(&self, contamination: ContaminationType) -> &[TechniqueOption] {
        self.table
            .iter()
            .find(|(kind, _)| *kind == contamination)
            .map(|(_, options)| options.as_slice())
            .unwrap_or(&[])
    }

    /// Best option under a priority; the earliest option wins ties.
    ///
    /// Returns `None` when no option is recorded for the type.
    pub fn recommend_best(
        &self,
        contamination: ContaminationType,
        priority: SelectionPriority,
    ) -> Option<&TechniqueOption> {
        let options = self.analyze(contamination);
        let mut best = options.first()?;
        for option in &options[1..] {
            let better = match priority {
                SelectionPriority::Effectiveness => option.effectiveness > best.effectiveness,
                SelectionPriority::Cost => option.cost < best.cost,
            };
            if better {
                best = option;
            }
        }
        Some(best)
    }
}

impl Default for ContaminationAnalyzer {
    fn default() -> Self {
        Self::new(vec![(
            ContaminationType::HeavyMetals,
            vec![
                TechniqueOption {
                    technique: RemediationTechnique::Phytoremediation,
                    effectiveness: 0.75,
                    timeline: "12-24 months".to_string(),
                    cost: CostLevel::Low,
                    biodiversity_impact: "Positive".to_string(),
                    risks: vec!["Weather dependency".to_string(), "Slow processing".to_string()],
                },
                TechniqueOption {
                    technique: RemediationTechnique::Mycoremediation,
                    effectiveness: 0.85,
                    timeline: "6-12 months".to_string(),
                    cost: CostLevel::Medium,
                    biodiversity_impact: "Very positive".to_string(),
                    risks: vec!["Fungal management".to_string(), "pH sensitivity".to_string()],
                },
            ],
        )])
    }
}
