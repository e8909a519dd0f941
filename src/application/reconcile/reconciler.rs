//! Reconciliation of a desired application or group against the orchestrator.
//!
//! Decision procedure per target:
//!
//! 1. Check whether the root resource exists.
//! 2. Exists and no delete-before-deploy: update in place. Applications are
//!    replaced with force enabled; groups go through the cascade leaf update.
//! 3. Otherwise: optionally delete (best effort), then create.
//!
//! Calls are issued strictly one at a time. Any fatal failure stops the run
//! before another call is made. A target that breaks a resource invariant is
//! rejected before the first call.

use std::sync::Arc;

use tracing::{error, info};

use super::existence;
use crate::domain::error::DomainError;
use crate::domain::id::ResourceId;
use crate::domain::outcome::Outcome;
use crate::domain::policy::{DeleteFailurePolicy, DeployTarget, ReconcilePolicy, TargetKind};
use crate::domain::resource::{Application, Group};
use crate::error::ReconcileError;
use crate::port::outbound::orchestrator::{Orchestrator, OrchestratorError};

/// Drives an [`Orchestrator`] to converge one deploy target.
pub struct Reconciler {
    orchestrator: Arc<dyn Orchestrator>,
    policy: ReconcilePolicy,
}

impl Reconciler {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, policy: ReconcilePolicy) -> Self {
        Self {
            orchestrator,
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    fn address(&self) -> &str {
        self.orchestrator.address()
    }

    /// Reconcile the target and report what was done.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Invalid`] for a target that fails
    /// validation, and a [`ReconcileError`] naming the resource and
    /// orchestrator address for any failed existence check, create or update.
    pub async fn reconcile(&self, target: &DeployTarget) -> Result<Outcome, ReconcileError> {
        match target {
            DeployTarget::Application(app) => self.reconcile_app(app).await,
            DeployTarget::Group(group) => self.reconcile_group(group).await,
        }
    }

    /// Reconcile a single application.
    ///
    /// # Errors
    ///
    /// See [`reconcile`](Self::reconcile).
    pub async fn reconcile_app(&self, app: &Application) -> Result<Outcome, ReconcileError> {
        app.validate().map_err(|source| invalid(&app.id, source))?;
        info!(id = %app.id, address = %self.address(), "deploying application");

        let exists = existence::app_exists(self.orchestrator.as_ref(), &app.id).await?;
        if exists && !self.policy.delete_before_deploy {
            info!(id = %app.id, "already exists - will be updated");
            self.update_app(app).await?;
            return Ok(Outcome::Updated { id: app.id.clone() });
        }

        let delete_failed = if self.policy.delete_before_deploy {
            self.delete_before_create(TargetKind::Application, &app.id)
                .await?
        } else {
            false
        };

        info!(id = %app.id, "will be created");
        self.orchestrator
            .create_app(app)
            .await
            .map_err(|source| self.create_error(&app.id, source))?;
        info!(id = %app.id, "application created");

        Ok(self.created(&app.id, delete_failed))
    }

    /// Reconcile a group tree.
    ///
    /// Creation and deletion act on the whole tree in one call. An existing
    /// group is never updated as a unit: see
    /// [`cascade_leaf_update`](Self::cascade_leaf_update).
    ///
    /// # Errors
    ///
    /// See [`reconcile`](Self::reconcile).
    pub async fn reconcile_group(&self, group: &Group) -> Result<Outcome, ReconcileError> {
        group.validate().map_err(|source| invalid(&group.id, source))?;
        info!(id = %group.id, address = %self.address(), "deploying group");

        let exists = existence::group_exists(self.orchestrator.as_ref(), &group.id).await?;
        if exists && !self.policy.delete_before_deploy {
            info!(id = %group.id, "group already exists - will be updated");
            let apps = self.cascade_leaf_update(group).await?;
            return Ok(Outcome::CascadeUpdated {
                group_id: group.id.clone(),
                apps,
            });
        }

        let delete_failed = if self.policy.delete_before_deploy {
            self.delete_before_create(TargetKind::Group, &group.id).await?
        } else {
            false
        };

        info!(id = %group.id, "group will be created");
        self.orchestrator
            .create_group(group)
            .await
            .map_err(|source| self.create_error(&group.id, source))?;
        info!(id = %group.id, "group created");

        Ok(self.created(&group.id, delete_failed))
    }

    /// Update every application of an existing group, one by one.
    ///
    /// The orchestrator creates and deletes group trees atomically but the
    /// engine does not replace an existing tree as a unit. Instead the whole
    /// tree is walked first (depth-first pre-order) and each application
    /// found at any depth is force-updated by id. Intermediate groups are
    /// never touched. The first failed update aborts the run.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Invalid`] without updating anything if the
    /// tree is nested too deep, and [`ReconcileError::Update`] for the first
    /// application that fails to update.
    pub async fn cascade_leaf_update(
        &self,
        group: &Group,
    ) -> Result<Vec<ResourceId>, ReconcileError> {
        let leaves = group
            .leaf_apps()
            .map_err(|source| invalid(&group.id, source))?;
        info!(
            id = %group.id,
            apps = leaves.len(),
            "cascading update to group applications"
        );

        let mut updated = Vec::with_capacity(leaves.len());
        for app in leaves {
            self.update_app(app).await?;
            updated.push(app.id.clone());
        }
        Ok(updated)
    }

    async fn update_app(&self, app: &Application) -> Result<(), ReconcileError> {
        self.orchestrator
            .update_app(&app.id, app, true)
            .await
            .map_err(|source| ReconcileError::Update {
                id: app.id.to_string(),
                address: self.address().to_string(),
                source,
            })?;
        info!(id = %app.id, "application updated");
        Ok(())
    }

    /// Delete step of delete-before-deploy.
    ///
    /// Returns whether the delete failed and was tolerated.
    async fn delete_before_create(
        &self,
        kind: TargetKind,
        id: &ResourceId,
    ) -> Result<bool, ReconcileError> {
        let result = match kind {
            TargetKind::Application => self.orchestrator.delete_app(id).await,
            TargetKind::Group => self.orchestrator.delete_group(id).await,
        };

        let source = match result {
            Ok(()) => {
                info!(id = %id, kind = %kind, "deleted");
                return Ok(false);
            }
            Err(source) => source,
        };

        match self.policy.delete_failure {
            DeleteFailurePolicy::LogAndContinue => {
                error!(
                    id = %id,
                    kind = %kind,
                    error = %source,
                    "failed to delete before deploy, creating anyway"
                );
                Ok(true)
            }
            DeleteFailurePolicy::Abort => Err(ReconcileError::Delete {
                id: id.to_string(),
                address: self.address().to_string(),
                source,
            }),
        }
    }

    fn create_error(&self, id: &ResourceId, source: OrchestratorError) -> ReconcileError {
        ReconcileError::Create {
            id: id.to_string(),
            address: self.address().to_string(),
            source,
        }
    }

    fn created(&self, id: &ResourceId, delete_failed: bool) -> Outcome {
        if self.policy.delete_before_deploy {
            Outcome::Recreated {
                id: id.clone(),
                delete_failed,
            }
        } else {
            Outcome::Created { id: id.clone() }
        }
    }
}

fn invalid(id: &ResourceId, source: DomainError) -> ReconcileError {
    error!(id = %id, error = %source, "invalid deploy target");
    ReconcileError::Invalid {
        id: id.to_string(),
        source,
    }
}
