//! CLI integration tests.

mod support;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::descriptor::{Workspace, APP, TEAM};
use support::marathon::{presence_router, StubMarathon};

/// The binary, run inside `workspace` with no Marathon settings inherited.
fn marathon_deploy(workspace: &Workspace) -> Command {
    let mut cmd = cargo_bin_cmd!("marathon-deploy");
    cmd.current_dir(workspace.path())
        .env_remove("MARATHON_HOST")
        .env_remove("MARATHON_LOGIN")
        .env_remove("MARATHON_PASSWORD")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

#[test]
fn help_lists_commands() {
    marathon_deploy(&Workspace::new())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn deploy_help_documents_flags() {
    marathon_deploy(&Workspace::new())
        .args(["deploy", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--marathon-host"))
        .stdout(predicate::str::contains("--delete-before-deploy"))
        .stdout(predicate::str::contains("--insecure"));
}

#[test]
fn missing_host_is_a_config_error() {
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    marathon_deploy(&workspace)
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marathon_host"));
}

#[test]
fn explicit_config_file_must_exist() {
    let workspace = Workspace::new();

    marathon_deploy(&workspace)
        .args(["check", "config", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn check_config_reads_default_file_and_descriptor() {
    let workspace = Workspace::new();
    workspace.write("deploy/team.json", TEAM);
    workspace.write(
        "marathon-deploy.toml",
        "[marathon]\nhost = \"http://marathon.example.com:8080\"\n\n[deploy]\ndescriptor = \"deploy/team.json\"\ngroup = true\n",
    );

    marathon_deploy(&workspace)
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("group /team"))
        .stdout(predicate::str::contains("marathon-deploy.toml"));
}

#[test]
fn environment_supplies_host() {
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    marathon_deploy(&workspace)
        .env("MARATHON_HOST", "http://from-env:8080")
        .args(["check", "config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-env:8080"))
        .stdout(predicate::str::contains(r#""type":"field""#));
}

#[test]
fn flag_overrides_environment() {
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    marathon_deploy(&workspace)
        .env("MARATHON_HOST", "http://from-env:8080")
        .args(["check", "config", "--marathon-host", "http://from-flag:8080"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-flag:8080"))
        .stdout(predicate::str::contains("from-env").not());
}

#[test]
fn non_http_host_is_rejected() {
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    marathon_deploy(&workspace)
        .args(["check", "config", "--marathon-host", "ftp://marathon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marathon_host"));
}

#[test]
fn wrong_descriptor_shape_is_reported() {
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", "[1, 2, 3]");

    marathon_deploy(&workspace)
        .args(["check", "config", "--marathon-host", "http://m:8080"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target/marathon.json"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn deploy_creates_absent_application() {
    let stub = StubMarathon::start(presence_router(&[])).await;
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    let mut cmd = marathon_deploy(&workspace);
    cmd.args(["deploy", "--json", "--marathon-host", stub.address()]);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"created""#))
        .stdout(predicate::str::contains(r#""id":"/svc/api""#));
    assert_eq!(stub.lines(), vec!["GET /v2/apps/svc/api", "POST /v2/apps"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn deploy_failure_exits_nonzero_with_context() {
    let stub = StubMarathon::start(|_| (500, r#"{"message": "boom"}"#.into())).await;
    let workspace = Workspace::new();
    workspace.write("target/marathon.json", APP);

    let mut cmd = marathon_deploy(&workspace);
    cmd.args(["deploy", "--quiet", "--marathon-host", stub.address()]);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to check whether /svc/api exists"))
        .stderr(predicate::str::contains("boom"));
    assert_eq!(stub.lines(), vec!["GET /v2/apps/svc/api"]);
}
