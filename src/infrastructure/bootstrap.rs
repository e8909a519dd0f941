//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::inbound::descriptor;
use crate::adapter::outbound::marathon::client::MarathonClient;
use crate::application::reconcile::reconciler::Reconciler;
use crate::domain::policy::DeployTarget;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::orchestrator::Orchestrator;

/// Build the orchestrator client for one run.
pub(crate) fn build_orchestrator(config: &Config) -> Result<Arc<dyn Orchestrator>> {
    let transport = config.transport()?;
    if transport.is_insecure() {
        warn!(
            address = %transport.base(),
            "TLS certificate verification disabled for this client"
        );
    }
    let client = MarathonClient::new(&transport)?;
    info!(
        address = %client.address(),
        authenticated = transport.auth().is_some(),
        "orchestrator client ready"
    );
    Ok(Arc::new(client))
}

/// Build a reconciler bound to `orchestrator` with the configured policy.
pub(crate) fn build_reconciler(config: &Config, orchestrator: Arc<dyn Orchestrator>) -> Reconciler {
    Reconciler::new(orchestrator, config.policy())
}

/// Decode the configured descriptor as the configured target kind.
pub(crate) fn load_target(config: &Config) -> Result<DeployTarget> {
    Ok(descriptor::load(&config.deploy.descriptor, config.target_kind())?)
}
