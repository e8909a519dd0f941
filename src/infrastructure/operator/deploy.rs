//! Deployment operator implementation.

use async_trait::async_trait;
use tracing::{error, info};

use super::entry::Operator;
use super::shared;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::deploy::{
    DeployOperator, DeployPlan, DeployReport, DeployRequest,
};

#[async_trait]
impl DeployOperator for Operator {
    fn prepare_deploy(&self, request: &DeployRequest) -> Result<DeployPlan> {
        let config = shared::load_config(self, request)?;
        let target = bootstrap::load_target(&config)?;
        shared::plan(&config, request, target)
    }

    async fn execute_deploy(&self, plan: DeployPlan) -> Result<DeployReport> {
        let config = shared::load_config(self, &plan.request)?;
        config.init_logging();

        info!(
            id = %plan.resource_id,
            kind = %plan.kind,
            descriptor = %plan.descriptor,
            address = %plan.marathon_host,
            "deploying Marathon config"
        );

        let orchestrator = bootstrap::build_orchestrator(&config)?;
        let reconciler = bootstrap::build_reconciler(&config, orchestrator);

        match reconciler.reconcile(&plan.target).await {
            Ok(outcome) => {
                info!(outcome = %outcome, "deployment finished");
                Ok(DeployReport { plan, outcome })
            }
            Err(e) => {
                error!(error = %e, id = %e.resource_id(), "deployment failed");
                Err(e.into())
            }
        }
    }
}
