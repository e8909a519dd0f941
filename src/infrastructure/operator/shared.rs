//! Shared helper routines for operator implementations.

use std::path::PathBuf;

use super::entry::Operator;
use crate::domain::policy::DeployTarget;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, Overrides};
use crate::port::inbound::operator::deploy::{DeployPlan, DeployRequest};

pub(super) fn overrides(request: &DeployRequest) -> Overrides {
    Overrides {
        host: request.marathon_host.clone(),
        login: request.login.clone(),
        password: request.password.clone(),
        insecure: request.insecure,
        timeout_secs: request.timeout_secs,
        descriptor: request.descriptor.as_deref().map(PathBuf::from),
        group: request.group,
        delete_before_deploy: request.delete_before_deploy,
        log_level: request.log_level.clone(),
        json_logs: request.json_logs,
    }
}

pub(super) fn load_config(operator: &Operator, request: &DeployRequest) -> Result<Config> {
    Config::resolve(
        request.config_toml.as_deref(),
        &overrides(request),
        operator.env(),
    )
}

pub(super) fn plan(
    config: &Config,
    request: &DeployRequest,
    target: DeployTarget,
) -> Result<DeployPlan> {
    let nested_groups = match &target {
        DeployTarget::Application(_) => 0,
        DeployTarget::Group(group) => group.nested_group_count(),
    };

    Ok(DeployPlan {
        marathon_host: config.host()?.to_string(),
        descriptor: config.deploy.descriptor.display().to_string(),
        kind: target.kind(),
        resource_id: target.id().to_string(),
        app_count: target.app_count(),
        nested_groups,
        delete_before_deploy: config.deploy.delete_before_deploy,
        insecure: config.marathon.insecure,
        authenticated: config.credentials().is_some(),
        request: request.clone(),
        target,
    })
}
