//! Diagnostic operator implementation.

use super::entry::Operator;
use super::shared;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::deploy::DeployRequest;
use crate::port::inbound::operator::diagnostic::{ConfigCheckReport, DiagnosticOperator};

impl DiagnosticOperator for Operator {
    fn check_config(&self, request: &DeployRequest) -> Result<ConfigCheckReport> {
        let config = shared::load_config(self, request)?;
        let target = bootstrap::load_target(&config)?;
        let plan = shared::plan(&config, request, target)?;

        let mut warnings = Vec::new();
        if plan.insecure {
            warnings.push("TLS certificate verification is disabled (insecure)".to_string());
        }
        if plan.insecure && plan.authenticated {
            warnings.push("credentials will be sent without verifying the server".to_string());
        }
        if plan.authenticated && plan.marathon_host.starts_with("http://") {
            warnings.push("credentials will be sent over plain HTTP".to_string());
        }
        if plan.app_count == 0 {
            warnings.push(format!("{} contains no applications", plan.resource_id));
        }

        Ok(ConfigCheckReport {
            plan,
            log_level: config.logging.level,
            log_format: config.logging.format,
            warnings,
        })
    }
}
