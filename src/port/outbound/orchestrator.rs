//! Orchestrator port: the remote scheduler the reconciler drives.
//!
//! Defines the capability surface over a single application or group, plus
//! the typed failure that lets callers branch on the kind of failure instead
//! of inspecting error text.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::id::ResourceId;
use crate::domain::resource::{Application, Group};

/// Coarse classification of an orchestrator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The resource does not exist (HTTP 404).
    NotFound,
    /// Credentials were rejected (HTTP 401/403).
    Unauthorized,
    /// Any other 4xx response.
    ClientError,
    /// 5xx response.
    ServerError,
    /// The request never produced a usable response.
    Transport,
}

/// Failure of a single orchestrator call.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The orchestrator answered with a non-success status.
    #[error("orchestrator responded {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl OrchestratorError {
    /// Create a status failure.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 404 response.
    pub fn not_found(body: impl Into<String>) -> Self {
        Self::status(404, body)
    }

    /// Classify this failure.
    #[must_use]
    pub fn class(&self) -> StatusClass {
        match self {
            Self::Status { status: 404, .. } => StatusClass::NotFound,
            Self::Status {
                status: 401 | 403, ..
            } => StatusClass::Unauthorized,
            Self::Status { status, .. } if *status >= 500 => StatusClass::ServerError,
            Self::Status { .. } => StatusClass::ClientError,
            Self::Transport(_) | Self::Decode(_) => StatusClass::Transport,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.class() == StatusClass::NotFound
    }
}

pub type OrchestratorResult<T> = std::result::Result<T, OrchestratorError>;

/// Client for the remote cluster orchestrator.
///
/// Each call targets one application or one group tree. Implementations own
/// transport concerns (TLS trust, authentication, timeouts); callers only see
/// the typed [`OrchestratorError`].
///
/// # Errors
///
/// Every method returns [`OrchestratorError`] on failure. A missing resource
/// on a get is reported as a 404 [`OrchestratorError::Status`].
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Base address of the orchestrator, used in error reports.
    fn address(&self) -> &str;

    /// Fetch an application; succeeds only if it exists.
    async fn get_app(&self, id: &ResourceId) -> OrchestratorResult<()>;

    async fn create_app(&self, app: &Application) -> OrchestratorResult<()>;

    /// Replace the application stored under `id` with `app`.
    ///
    /// With `force`, an in-flight deployment of the same id is overridden.
    async fn update_app(
        &self,
        id: &ResourceId,
        app: &Application,
        force: bool,
    ) -> OrchestratorResult<()>;

    async fn delete_app(&self, id: &ResourceId) -> OrchestratorResult<()>;

    /// Fetch a group; succeeds only if it exists.
    async fn get_group(&self, id: &ResourceId) -> OrchestratorResult<()>;

    /// Create a whole group tree in one call.
    async fn create_group(&self, group: &Group) -> OrchestratorResult<()>;

    /// Delete a whole group tree in one call.
    async fn delete_group(&self, id: &ResourceId) -> OrchestratorResult<()>;
}
