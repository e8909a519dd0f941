//! In-memory [`Orchestrator`] that records every call.
//!
//! [`RecordingOrchestrator`] keeps a set of present application and group
//! ids, answers gets with 404 for anything absent, and can be scripted to
//! fail a specific operation on a specific id. Calls are recorded in order
//! so tests can assert the exact sequence the reconciler issued.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::id::ResourceId;
use crate::domain::resource::{Application, Group};
use crate::port::outbound::orchestrator::{Orchestrator, OrchestratorError, OrchestratorResult};

/// Address reported by [`RecordingOrchestrator`].
pub const DEFAULT_ADDRESS: &str = "http://marathon.test:8080";

/// A recorded orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetApp(String),
    CreateApp(String),
    UpdateApp { id: String, force: bool },
    DeleteApp(String),
    GetGroup(String),
    CreateGroup(String),
    DeleteGroup(String),
}

impl Call {
    /// Whether this call changes orchestrator state.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::GetApp(_) | Self::GetGroup(_))
    }
}

/// Operation selector for scripted failures. Applies to apps and groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Op {
    Get,
    Create,
    Update,
    Delete,
}

type FailureFn = Box<dyn Fn() -> OrchestratorError + Send + Sync>;

#[derive(Default)]
struct State {
    apps: HashSet<String>,
    groups: HashSet<String>,
    calls: Vec<Call>,
}

/// Scripted, recording orchestrator fake.
pub struct RecordingOrchestrator {
    state: Mutex<State>,
    failures: HashMap<(Op, String), FailureFn>,
}

impl Default for RecordingOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingOrchestrator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            failures: HashMap::new(),
        }
    }

    /// Mark an application as already deployed.
    pub fn with_app(mut self, id: &str) -> Self {
        self.state.get_mut().apps.insert(id.to_string());
        self
    }

    /// Mark a group as already deployed.
    pub fn with_group(mut self, id: &str) -> Self {
        self.state.get_mut().groups.insert(id.to_string());
        self
    }

    pub fn fail_get<F>(self, id: &str, failure: F) -> Self
    where
        F: Fn() -> OrchestratorError + Send + Sync + 'static,
    {
        self.fail(Op::Get, id, failure)
    }

    pub fn fail_create<F>(self, id: &str, failure: F) -> Self
    where
        F: Fn() -> OrchestratorError + Send + Sync + 'static,
    {
        self.fail(Op::Create, id, failure)
    }

    pub fn fail_update<F>(self, id: &str, failure: F) -> Self
    where
        F: Fn() -> OrchestratorError + Send + Sync + 'static,
    {
        self.fail(Op::Update, id, failure)
    }

    pub fn fail_delete<F>(self, id: &str, failure: F) -> Self
    where
        F: Fn() -> OrchestratorError + Send + Sync + 'static,
    {
        self.fail(Op::Delete, id, failure)
    }

    fn fail<F>(mut self, op: Op, id: &str, failure: F) -> Self
    where
        F: Fn() -> OrchestratorError + Send + Sync + 'static,
    {
        self.failures.insert((op, id.to_string()), Box::new(failure));
        self
    }

    /// All calls issued so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Calls that change orchestrator state, in order.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn has_app(&self, id: &str) -> bool {
        self.state.lock().apps.contains(id)
    }

    pub fn has_group(&self, id: &str) -> bool {
        self.state.lock().groups.contains(id)
    }

    fn record(&self, call: Call) {
        self.state.lock().calls.push(call);
    }

    fn scripted(&self, op: Op, id: &str) -> OrchestratorResult<()> {
        match self.failures.get(&(op, id.to_string())) {
            Some(failure) => Err(failure()),
            None => Ok(()),
        }
    }
}

fn absent(kind: &str, id: &str) -> OrchestratorError {
    OrchestratorError::not_found(format!("{kind} '{id}' does not exist"))
}

#[async_trait]
impl Orchestrator for RecordingOrchestrator {
    fn address(&self) -> &str {
        DEFAULT_ADDRESS
    }

    async fn get_app(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.record(Call::GetApp(id.to_string()));
        self.scripted(Op::Get, id.as_str())?;
        if self.has_app(id.as_str()) {
            Ok(())
        } else {
            Err(absent("App", id.as_str()))
        }
    }

    async fn create_app(&self, app: &Application) -> OrchestratorResult<()> {
        self.record(Call::CreateApp(app.id.to_string()));
        self.scripted(Op::Create, app.id.as_str())?;
        self.state.lock().apps.insert(app.id.to_string());
        Ok(())
    }

    async fn update_app(
        &self,
        id: &ResourceId,
        _app: &Application,
        force: bool,
    ) -> OrchestratorResult<()> {
        self.record(Call::UpdateApp {
            id: id.to_string(),
            force,
        });
        self.scripted(Op::Update, id.as_str())
    }

    async fn delete_app(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.record(Call::DeleteApp(id.to_string()));
        self.scripted(Op::Delete, id.as_str())?;
        if self.state.lock().apps.remove(id.as_str()) {
            Ok(())
        } else {
            Err(absent("App", id.as_str()))
        }
    }

    async fn get_group(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.record(Call::GetGroup(id.to_string()));
        self.scripted(Op::Get, id.as_str())?;
        if self.has_group(id.as_str()) {
            Ok(())
        } else {
            Err(absent("Group", id.as_str()))
        }
    }

    async fn create_group(&self, group: &Group) -> OrchestratorResult<()> {
        self.record(Call::CreateGroup(group.id.to_string()));
        self.scripted(Op::Create, group.id.as_str())?;
        self.state.lock().groups.insert(group.id.to_string());
        Ok(())
    }

    async fn delete_group(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.record(Call::DeleteGroup(id.to_string()));
        self.scripted(Op::Delete, id.as_str())?;
        if self.state.lock().groups.remove(id.as_str()) {
            Ok(())
        } else {
            Err(absent("Group", id.as_str()))
        }
    }
}
