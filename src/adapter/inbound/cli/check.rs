//! Handler for `check config`.

use super::command::DeployArgs;
use super::{operator, output};
use crate::error::Result;

/// Validate settings and the descriptor without contacting Marathon.
pub fn execute_config(args: DeployArgs) -> Result<()> {
    let config_path = args.config.clone();
    let config_toml = operator::read_config_toml(config_path.as_deref())?;
    let from_file = config_toml.is_some();
    let report = operator::operator().check_config(&args.into_request(config_toml))?;
    let plan = &report.plan;

    output::section("Configuration Check");
    match (&config_path, from_file) {
        (Some(path), _) => output::field("Config", path.display()),
        (None, true) => output::field("Config", operator::DEFAULT_CONFIG_FILE),
        (None, false) => output::field("Config", "defaults, environment and flags"),
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Marathon", &plan.marathon_host);
    output::field("Descriptor", &plan.descriptor);
    output::field("Target", format!("{} {}", plan.kind, plan.resource_id));
    output::field("Applications", plan.app_count);
    if plan.nested_groups > 0 {
        output::field("Nested groups", plan.nested_groups);
    }
    output::field(
        "Mode",
        if plan.delete_before_deploy {
            "delete before deploy"
        } else {
            "update in place"
        },
    );
    output::field(
        "Auth",
        if plan.authenticated { "basic" } else { "none" },
    );
    output::field("Logging", format!("{} ({})", report.log_level, report.log_format));

    for warning in &report.warnings {
        output::warning(warning);
    }
    if !plan.authenticated {
        output::hint("set MARATHON_LOGIN and MARATHON_PASSWORD if Marathon requires auth");
    }

    output::success("Configuration check complete");
    Ok(())
}
