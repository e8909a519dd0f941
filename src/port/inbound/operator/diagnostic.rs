//! Diagnostic projections for operator-facing adapters.

use super::deploy::{DeployPlan, DeployRequest};
use crate::error::Result;

/// Summary output for `check config`.
#[derive(Debug, Clone)]
pub struct ConfigCheckReport {
    pub plan: DeployPlan,
    pub log_level: String,
    pub log_format: String,
    /// Non-fatal observations about the configuration.
    pub warnings: Vec<String>,
}

/// Diagnostic use-cases for operator-facing adapters.
pub trait DiagnosticOperator: Send + Sync {
    /// Validate settings and descriptor for `check config`.
    fn check_config(&self, request: &DeployRequest) -> Result<ConfigCheckReport>;
}
