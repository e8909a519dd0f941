//! Reconciliation policy and deploy target selection.

use std::fmt;

use super::id::ResourceId;
use super::resource::{Application, Group};

/// Which shape of resource a deployment run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    #[default]
    Application,
    Group,
}

impl TargetKind {
    /// Select the kind from the `group` flag.
    #[must_use]
    pub const fn from_group_flag(group: bool) -> Self {
        if group {
            Self::Group
        } else {
            Self::Application
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// What to do when the delete step of delete-before-deploy fails.
///
/// The delete call cannot tell "did not exist" apart from a real failure,
/// so the default is to log it and still attempt the create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFailurePolicy {
    #[default]
    LogAndContinue,
    Abort,
}

/// Per-run reconciliation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcilePolicy {
    /// Delete an existing resource and recreate it instead of updating.
    pub delete_before_deploy: bool,
    pub delete_failure: DeleteFailurePolicy,
}

impl ReconcilePolicy {
    /// Policy that updates existing resources in place.
    #[must_use]
    pub const fn update_in_place() -> Self {
        Self {
            delete_before_deploy: false,
            delete_failure: DeleteFailurePolicy::LogAndContinue,
        }
    }

    /// Policy that always deletes and recreates.
    #[must_use]
    pub const fn recreate() -> Self {
        Self {
            delete_before_deploy: true,
            delete_failure: DeleteFailurePolicy::LogAndContinue,
        }
    }
}

/// The desired resource of a deployment run.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployTarget {
    Application(Application),
    Group(Group),
}

impl DeployTarget {
    /// Id of the root resource.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        match self {
            Self::Application(app) => &app.id,
            Self::Group(group) => &group.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Application(_) => TargetKind::Application,
            Self::Group(_) => TargetKind::Group,
        }
    }

    /// Number of applications that a deployment of this target touches.
    #[must_use]
    pub fn app_count(&self) -> usize {
        match self {
            Self::Application(_) => 1,
            Self::Group(group) => group.app_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_flag_selects_kind() {
        assert_eq!(TargetKind::from_group_flag(true), TargetKind::Group);
        assert_eq!(TargetKind::from_group_flag(false), TargetKind::Application);
    }

    #[test]
    fn default_policy_updates_and_tolerates_delete_failures() {
        let policy = ReconcilePolicy::default();
        assert!(!policy.delete_before_deploy);
        assert_eq!(policy.delete_failure, DeleteFailurePolicy::LogAndContinue);
        assert_eq!(policy, ReconcilePolicy::update_in_place());
    }

    #[test]
    fn target_counts_leaf_apps() {
        let target = DeployTarget::Group(
            Group::new("/team")
                .with_app(Application::new("/team/a"))
                .with_group(Group::new("/team/sub").with_app(Application::new("/team/sub/a"))),
        );
        assert_eq!(target.app_count(), 2);
        assert_eq!(target.kind(), TargetKind::Group);
        assert_eq!(target.id().as_str(), "/team");
    }
}
