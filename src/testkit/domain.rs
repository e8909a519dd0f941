//! Builders for domain values used across tests.
//!
//! Provides concise factory functions for [`Application`] and [`Group`]
//! so tests focus on assertions rather than construction boilerplate.

use serde_json::json;

use crate::domain::resource::{Application, Group};

/// Create an application with a minimal container configuration.
pub fn app(id: &str) -> Application {
    Application::new(id)
        .with("instances", json!(1))
        .with("cpus", json!(0.1))
        .with("mem", json!(64))
        .with("container", json!({"docker": {"image": "nginx:1.25"}}))
}

/// Create a group holding the given applications.
pub fn group(id: &str, apps: &[&str]) -> Group {
    apps.iter()
        .fold(Group::new(id), |group, app_id| group.with_app(app(app_id)))
}

/// The `/team` tree: `/team/a` at the root, `/team/sub/a` one level down.
pub fn team_tree() -> Group {
    group("/team", &["/team/a"]).with_group(group("/team/sub", &["/team/sub/a"]))
}
