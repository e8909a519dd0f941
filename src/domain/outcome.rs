//! Result of reconciling one deploy target.

use std::fmt;

use super::id::ResourceId;

/// What the reconciler did to converge a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resource was absent and has been created.
    Created { id: ResourceId },
    /// The resource was deleted (best effort) and created again.
    Recreated {
        id: ResourceId,
        /// The delete call failed and was tolerated.
        delete_failed: bool,
    },
    /// An existing application was replaced in place.
    Updated { id: ResourceId },
    /// An existing group was converged by updating each of its applications.
    CascadeUpdated {
        group_id: ResourceId,
        apps: Vec<ResourceId>,
    },
}

impl Outcome {
    /// Id of the root resource.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        match self {
            Self::Created { id } | Self::Recreated { id, .. } | Self::Updated { id } => id,
            Self::CascadeUpdated { group_id, .. } => group_id,
        }
    }

    /// Short verb for reports.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Recreated { .. } => "recreated",
            Self::Updated { .. } => "updated",
            Self::CascadeUpdated { .. } => "updated",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CascadeUpdated { group_id, apps } => {
                write!(f, "{group_id} updated ({} applications)", apps.len())
            }
            Self::Recreated {
                id,
                delete_failed: true,
            } => write!(f, "{id} recreated (delete failed, create succeeded)"),
            other => write!(f, "{} {}", other.id(), other.action()),
        }
    }
}
