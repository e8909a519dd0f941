//! Deployment request and projection types for operator-facing adapters.
//!
//! Defines what an inbound adapter (the CLI) hands to the operator to run a
//! deployment, and what it gets back for display.

use async_trait::async_trait;

use crate::domain::outcome::Outcome;
use crate::domain::policy::{DeployTarget, TargetKind};
use crate::error::Result;

/// Deployment parameters collected by an inbound adapter.
///
/// Optional fields and `false` flags defer to the configuration file and
/// environment.
#[derive(Debug, Clone, Default)]
pub struct DeployRequest {
    /// Raw TOML configuration content, if a configuration file was found.
    pub config_toml: Option<String>,

    /// Orchestrator base address.
    pub marathon_host: Option<String>,

    /// Basic-auth login.
    pub login: Option<String>,

    /// Basic-auth password.
    pub password: Option<String>,

    /// Disable TLS certificate verification for this run.
    pub insecure: bool,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Descriptor file location.
    pub descriptor: Option<String>,

    /// Treat the descriptor as a group.
    pub group: bool,

    /// Delete existing resources and recreate them.
    pub delete_before_deploy: bool,

    /// Log level or filter directive.
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    pub json_logs: bool,
}

/// Resolved view of what a deployment will do.
///
/// Carries the decoded target, so executing a plan deploys exactly what was
/// summarized even if the descriptor file changes in between.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub marathon_host: String,
    pub descriptor: String,
    pub kind: TargetKind,
    pub resource_id: String,
    /// Applications touched by a cascade update, or 1 for an application.
    pub app_count: usize,
    /// Nested groups below the root (0 for an application).
    pub nested_groups: usize,
    pub delete_before_deploy: bool,
    pub insecure: bool,
    pub authenticated: bool,
    /// The request the plan was prepared from.
    pub request: DeployRequest,
    /// The decoded descriptor.
    pub target: DeployTarget,
}

/// Result of a completed deployment.
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub plan: DeployPlan,
    pub outcome: Outcome,
}

/// Deployment use-cases for operator-facing adapters.
#[async_trait]
pub trait DeployOperator: Send + Sync {
    /// Resolve settings and decode the descriptor without contacting the
    /// orchestrator.
    fn prepare_deploy(&self, request: &DeployRequest) -> Result<DeployPlan>;

    /// Deploy a prepared plan. The descriptor is not read again.
    async fn execute_deploy(&self, plan: DeployPlan) -> Result<DeployReport>;
}
