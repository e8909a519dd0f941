//! Deployment settings: file, environment and command-line layers.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! variables (including a `.env` file loaded at startup), command-line
//! overrides. Validation runs once all layers are applied.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::marathon::transport::{Credentials, MarathonTransport};
use crate::domain::policy::{ReconcilePolicy, TargetKind};
use crate::error::{ConfigError, Result};

/// Environment variable holding the orchestrator address.
pub const ENV_HOST: &str = "MARATHON_HOST";
/// Environment variable holding the basic-auth login.
pub const ENV_LOGIN: &str = "MARATHON_LOGIN";
/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "MARATHON_PASSWORD";

/// Default descriptor location, relative to the working directory.
pub const DEFAULT_DESCRIPTOR: &str = "target/marathon.json";

/// Orchestrator connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarathonConfig {
    /// Base address, e.g. `http://marathon.example.com:8080`. Required.
    pub host: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    /// Skip TLS certificate and hostname verification.
    pub insecure: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for MarathonConfig {
    fn default() -> Self {
        Self {
            host: None,
            login: None,
            password: None,
            insecure: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// What to deploy and how.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub descriptor: PathBuf,
    /// The descriptor holds a group rather than a single application.
    pub group: bool,
    pub delete_before_deploy: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from(DEFAULT_DESCRIPTOR),
            group: false,
            delete_before_deploy: false,
        }
    }
}

/// Command-line overrides. `None` and `false` leave the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub insecure: bool,
    pub timeout_secs: Option<u64>,
    pub descriptor: Option<PathBuf>,
    pub group: bool,
    pub delete_before_deploy: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

/// Complete deployment configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub marathon: MarathonConfig,
    pub deploy: DeployConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse the file layer. Does not validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Build the effective configuration from every layer and validate it.
    /// The environment layer is read through `env`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed TOML or invalid settings,
    /// including a missing orchestrator address.
    pub fn resolve<F>(config_toml: Option<&str>, overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_toml {
            Some(content) => Self::parse_toml(content)?,
            None => Self::default(),
        };
        config.apply_env(env);
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply the environment layer through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = non_empty(ENV_HOST) {
            self.marathon.host = Some(host);
        }
        if let Some(login) = non_empty(ENV_LOGIN) {
            self.marathon.login = Some(login);
        }
        if let Some(password) = non_empty(ENV_PASSWORD) {
            self.marathon.password = Some(password);
        }
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref host) = overrides.host {
            self.marathon.host = Some(host.clone());
        }
        if let Some(ref login) = overrides.login {
            self.marathon.login = Some(login.clone());
        }
        if let Some(ref password) = overrides.password {
            self.marathon.password = Some(password.clone());
        }
        if overrides.insecure {
            self.marathon.insecure = true;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.marathon.timeout_secs = timeout;
        }
        if let Some(ref descriptor) = overrides.descriptor {
            self.deploy.descriptor = descriptor.clone();
        }
        if overrides.group {
            self.deploy.group = true;
        }
        if overrides.delete_before_deploy {
            self.deploy.delete_before_deploy = true;
        }
        if let Some(ref level) = overrides.log_level {
            self.logging.level = level.clone();
        }
        if overrides.json_logs {
            self.logging.format = "json".to_string();
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no orchestrator address is
    /// configured, and [`ConfigError::InvalidValue`] for other bad values.
    pub fn validate(&self) -> Result<()> {
        let host = self.host()?;
        MarathonTransport::new(host)?;

        if self.marathon.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.marathon.login.is_none() && self.marathon.password.is_some() {
            return Err(ConfigError::InvalidValue {
                field: "password",
                reason: "a password requires a login".to_string(),
            }
            .into());
        }
        self.logging.validate()
    }

    /// The configured orchestrator address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if no address is set.
    pub fn host(&self) -> Result<&str> {
        self.marathon
            .host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                ConfigError::MissingField {
                    field: "marathon_host",
                }
                .into()
            })
    }

    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        self.marathon
            .login
            .as_ref()
            .map(|login| Credentials::new(login.clone(), self.marathon.password.clone()))
    }

    #[must_use]
    pub fn target_kind(&self) -> TargetKind {
        TargetKind::from_group_flag(self.deploy.group)
    }

    #[must_use]
    pub fn policy(&self) -> ReconcilePolicy {
        ReconcilePolicy {
            delete_before_deploy: self.deploy.delete_before_deploy,
            ..ReconcilePolicy::default()
        }
    }

    /// Transport settings for the orchestrator client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the address is missing or invalid.
    pub fn transport(&self) -> Result<MarathonTransport> {
        Ok(MarathonTransport::new(self.host()?)?
            .credentials(self.credentials())
            .insecure(self.marathon.insecure)
            .timeout(Duration::from_secs(self.marathon.timeout_secs)))
    }

    /// Initialize logging from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
