//! Handler for the `deploy` command.

use serde_json::json;

use super::command::DeployArgs;
use super::{operator, output};
use crate::domain::outcome::Outcome;
use crate::error::Result;
use crate::port::inbound::operator::deploy::{DeployPlan, DeployReport};

/// Deploy the configured descriptor.
pub async fn execute(args: DeployArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(args.config.as_deref())?;
    let request = args.into_request(config_toml);

    let plan = operator::operator().prepare_deploy(&request)?;
    print_plan(&plan);

    let pb = output::spinner(&format!(
        "Deploying {} {}",
        plan.kind,
        output::highlight(&plan.resource_id)
    ));
    let resource_id = plan.resource_id.clone();
    match operator::operator().execute_deploy(plan).await {
        Ok(report) => {
            output::spinner_success(&pb, &report.outcome.to_string());
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, &format!("Deployment of {resource_id} failed"));
            Err(e)
        }
    }
}

fn print_plan(plan: &DeployPlan) {
    output::section("Deploy");
    output::field("Marathon", &plan.marathon_host);
    output::field("Descriptor", &plan.descriptor);
    output::field("Target", format!("{} {}", plan.kind, plan.resource_id));
    if plan.delete_before_deploy {
        output::field("Mode", "delete before deploy");
    }
    if plan.insecure {
        output::warning("TLS certificate verification is disabled");
    }
}

fn print_report(report: &DeployReport) {
    if output::is_json() {
        output::json_output(json!({
            "type": "result",
            "payload": outcome_json(&report.outcome),
        }));
        return;
    }

    match &report.outcome {
        Outcome::Recreated {
            delete_failed: true,
            ..
        } => {
            output::warning("Delete failed before recreate; the create call succeeded");
        }
        Outcome::CascadeUpdated { apps, .. } if output::verbosity() > 0 => {
            for app in apps {
                output::field("Updated", app);
            }
        }
        _ => {}
    }
}

fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    let mut value = json!({
        "id": outcome.id(),
        "action": outcome.action(),
    });
    match outcome {
        Outcome::Recreated { delete_failed, .. } => {
            value["delete_failed"] = json!(delete_failed);
        }
        Outcome::CascadeUpdated { apps, .. } => {
            value["apps"] = json!(apps);
        }
        Outcome::Created { .. } | Outcome::Updated { .. } => {}
    }
    value
}
