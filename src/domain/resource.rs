//! Desired-state resources: applications and group trees.
//!
//! Only the identity and the tree structure are modeled. Everything else in
//! a descriptor (container, resources, env, health checks, ...) is kept as an
//! opaque JSON map and sent back to the orchestrator untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DomainError;
use super::id::ResourceId;

/// Maximum group nesting accepted from a descriptor.
pub const MAX_GROUP_DEPTH: usize = 32;

/// A single deployable application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ResourceId,
    /// Orchestrator-specific configuration, passed through unchanged.
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl Application {
    /// Create an application with no extra configuration.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            config: Map::new(),
        }
    }

    /// Attach a configuration field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    /// Check the application invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyId`] if the id is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_blank() {
            return Err(DomainError::EmptyId {
                kind: "application",
            });
        }
        Ok(())
    }
}

/// A named tree of nested groups, each holding applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<Application>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    /// Group-level fields other than the tree (dependencies, ...).
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl Group {
    /// Create an empty group.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            apps: Vec::new(),
            groups: Vec::new(),
            config: Map::new(),
        }
    }

    /// Add a member application.
    #[must_use]
    pub fn with_app(mut self, app: Application) -> Self {
        self.apps.push(app);
        self
    }

    /// Add a nested group.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Check the invariants of the whole tree.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyId`] for any blank group or application id,
    /// and [`DomainError::NestingTooDeep`] past [`MAX_GROUP_DEPTH`].
    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_at(1)
    }

    fn validate_at(&self, depth: usize) -> Result<(), DomainError> {
        if self.id.is_blank() {
            return Err(DomainError::EmptyId { kind: "group" });
        }
        if depth > MAX_GROUP_DEPTH {
            return Err(DomainError::NestingTooDeep {
                id: self.id.to_string(),
                max: MAX_GROUP_DEPTH,
            });
        }
        for app in &self.apps {
            app.validate()?;
        }
        for group in &self.groups {
            group.validate_at(depth + 1)?;
        }
        Ok(())
    }

    /// Every application in the tree, depth-first pre-order.
    ///
    /// A group's own applications come before those of its nested groups.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NestingTooDeep`] if the tree is nested deeper
    /// than [`MAX_GROUP_DEPTH`]; no partial list is returned.
    pub fn leaf_apps(&self) -> Result<Vec<&Application>, DomainError> {
        let mut leaves = Vec::new();
        collect_leaves(self, 1, &mut leaves)?;
        Ok(leaves)
    }

    /// Number of applications at every depth of the tree.
    #[must_use]
    pub fn app_count(&self) -> usize {
        self.apps.len() + self.groups.iter().map(Group::app_count).sum::<usize>()
    }

    /// Number of nested groups at every depth, excluding this one.
    #[must_use]
    pub fn nested_group_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| 1 + g.nested_group_count())
            .sum()
    }
}

fn collect_leaves<'a>(
    group: &'a Group,
    depth: usize,
    out: &mut Vec<&'a Application>,
) -> Result<(), DomainError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(DomainError::NestingTooDeep {
            id: group.id.to_string(),
            max: MAX_GROUP_DEPTH,
        });
    }
    out.extend(group.apps.iter());
    for child in &group.groups {
        collect_leaves(child, depth + 1, out)?;
    }
    Ok(())
}
