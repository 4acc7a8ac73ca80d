//! Contamination analysis queries.
//!
//! `AnalyzeContaminationHandler` lists every technique known for a
//! contamination type; `RecommendTechniqueHandler` picks one under a
//! selection priority.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::remediation::{
    ContaminationAnalyzer, ContaminationType, SelectionPriority, TechniqueOption,
};

/// Query listing the technique options for a contamination type.
#[derive(Debug, Clone)]
pub struct AnalyzeContaminationQuery {
    pub contamination_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContaminationAnalysis {
    pub contamination_type: ContaminationType,
    pub strategies: Vec<TechniqueOption>,
}

pub struct AnalyzeContaminationHandler {
    analyzer: Arc<ContaminationAnalyzer>,
}

impl AnalyzeContaminationHandler {
    pub fn new(analyzer: Arc<ContaminationAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn handle(&self, query: AnalyzeContaminationQuery) -> Result<ContaminationAnalysis, DomainError> {
        let contamination_type = parse_contamination(&query.contamination_type)?;
        let strategies = self.analyzer.analyze(contamination_type).to_vec();

        info!(
            contamination_type = %contamination_type,
            options = strategies.len(),
            "Contamination analyzed"
        );

        Ok(ContaminationAnalysis {
            contamination_type,
            strategies,
        })
    }
}

/// Query for the single best technique under a priority.
#[derive(Debug, Clone)]
pub struct RecommendTechniqueQuery {
    pub contamination_type: String,
    pub priority: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TechniqueRecommendation {
    pub option: TechniqueOption,
    pub priority: SelectionPriority,
}

impl TechniqueRecommendation {
    pub fn rationale(&self) -> String {
        format!("Selected based on {}", self.priority)
    }
}

pub struct RecommendTechniqueHandler {
    analyzer: Arc<ContaminationAnalyzer>,
}

impl RecommendTechniqueHandler {
    pub fn new(analyzer: Arc<ContaminationAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn handle(&self, query: RecommendTechniqueQuery) -> Result<TechniqueRecommendation, DomainError> {
        let contamination_type = parse_contamination(&query.contamination_type)?;
        let priority = match query.priority.as_deref() {
            Some(raw) => raw.parse::<SelectionPriority>().map_err(reject)?,
            None => SelectionPriority::default(),
        };

        let option = self
            .analyzer
            .recommend_best(contamination_type, priority)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "No remediation techniques recorded for {}",
                    contamination_type
                ))
                .with_detail("contamination_type", contamination_type.as_str())
            })?;

        info!(
            contamination_type = %contamination_type,
            priority = %priority,
            technique = %option.technique,
            "Technique recommended"
        );

        Ok(TechniqueRecommendation { option, priority })
    }
}

fn parse_contamination(raw: &str) -> Result<ContaminationType, DomainError> {
    raw.parse::<ContaminationType>().map_err(reject)
}

fn reject(error: ValidationError) -> DomainError {
    warn!(error = %error, "Rejected contamination query");
    DomainError::from(error)
}
