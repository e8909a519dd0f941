//! Existence classification for applications and groups.
//!
//! A get that fails with a not-found status means "absent" and drives the
//! create branch. Any other failure means the state could not be observed;
//! it is surfaced as fatal so an unseen resource is never created twice.

use tracing::debug;

use crate::domain::id::ResourceId;
use crate::error::ReconcileError;
use crate::port::outbound::orchestrator::{Orchestrator, OrchestratorResult};

/// Whether the application `id` exists on the orchestrator.
///
/// # Errors
///
/// Returns [`ReconcileError::Check`] for any failure other than not-found.
pub async fn app_exists(
    orchestrator: &dyn Orchestrator,
    id: &ResourceId,
) -> Result<bool, ReconcileError> {
    classify(orchestrator, id, orchestrator.get_app(id).await)
}

/// Whether the group `id` exists on the orchestrator.
///
/// # Errors
///
/// Returns [`ReconcileError::Check`] for any failure other than not-found.
pub async fn group_exists(
    orchestrator: &dyn Orchestrator,
    id: &ResourceId,
) -> Result<bool, ReconcileError> {
    classify(orchestrator, id, orchestrator.get_group(id).await)
}

fn classify(
    orchestrator: &dyn Orchestrator,
    id: &ResourceId,
    lookup: OrchestratorResult<()>,
) -> Result<bool, ReconcileError> {
    match lookup {
        Ok(()) => Ok(true),
        Err(e) if e.is_not_found() => {
            debug!(id = %id, "not found on orchestrator");
            Ok(false)
        }
        Err(source) => Err(ReconcileError::Check {
            id: id.to_string(),
            address: orchestrator.address().to_string(),
            source,
        }),
    }
}
