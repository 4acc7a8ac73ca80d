//! Remediation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::remediation::{CatalogError, StrategyCatalog};

/// Remediation configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemediationConfig {
    /// YAML strategy catalog replacing the built-in one
    pub catalog_path: Option<String>,
}

impl RemediationConfig {
    /// Loads the configured catalog, or the built-in one when none is set.
    pub fn load_catalog(&self) -> Result<StrategyCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => StrategyCatalog::from_file(path),
            None => Ok(StrategyCatalog::default()),
        }
    }

    /// Validate remediation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.catalog_path, Some(path) if path.trim().is_empty()) {
            return Err(ValidationError::BlankCatalogPath);
        }
        Ok(())
    }
}
