use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::port::outbound::orchestrator::OrchestratorError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors decoding a deployment descriptor.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("failed to read descriptor {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid descriptor {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Fatal reconciliation failures.
///
/// Every variant names the resource. Failed orchestrator calls also name the
/// orchestrator address and wrap the orchestrator failure as their source.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The target violates a resource invariant; nothing was sent.
    #[error("refusing to deploy {id}")]
    Invalid {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("failed to check whether {id} exists on {address}")]
    Check {
        id: String,
        address: String,
        #[source]
        source: OrchestratorError,
    },

    #[error("failed to create {id} on {address}")]
    Create {
        id: String,
        address: String,
        #[source]
        source: OrchestratorError,
    },

    #[error("failed to update {id} on {address}")]
    Update {
        id: String,
        address: String,
        #[source]
        source: OrchestratorError,
    },

    /// Only raised when delete failures are configured to abort.
    #[error("failed to delete {id} on {address}")]
    Delete {
        id: String,
        address: String,
        #[source]
        source: OrchestratorError,
    },
}

impl ReconcileError {
    /// Id of the resource the failed call targeted.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        match self {
            Self::Invalid { id, .. }
            | Self::Check { id, .. }
            | Self::Create { id, .. }
            | Self::Update { id, .. }
            | Self::Delete { id, .. } => id,
        }
    }

    /// The underlying orchestrator failure, if a call failed.
    #[must_use]
    pub fn orchestrator_error(&self) -> Option<&OrchestratorError> {
        match self {
            Self::Invalid { .. } => None,
            Self::Check { source, .. }
            | Self::Create { source, .. }
            | Self::Update { source, .. }
            | Self::Delete { source, .. } => Some(source),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Render the error with its full source chain, one cause per clause.
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            // Variants that already render their source are not repeated.
            if !message.ends_with(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        message
    }
}
