//! HTTP transport configuration for the Marathon client.
//!
//! TLS trust and timeouts are set on the one `reqwest::Client` built here.
//! Nothing is installed process-wide, so an insecure client never affects
//! another client in the same process.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{ConfigError, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: Option<String>) -> Self {
        Self {
            login: login.into(),
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Transport settings for one orchestrator client.
#[derive(Debug, Clone)]
pub struct MarathonTransport {
    base: Url,
    credentials: Option<Credentials>,
    insecure: bool,
    timeout: Duration,
}

impl MarathonTransport {
    /// Start from the orchestrator base address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the address is not an
    /// absolute `http` or `https` URL.
    pub fn new(address: &str) -> Result<Self> {
        Ok(Self {
            base: parse_base(address)?,
            credentials: None,
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Skip certificate and hostname verification for this client.
    #[must_use]
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    #[must_use]
    pub fn is_insecure(&self) -> bool {
        self.insecure
    }

    #[must_use]
    pub fn auth(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build the configured HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn build_client(&self) -> Result<Client> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("marathon-deploy/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(self.insecure)
            .build()?;
        Ok(client)
    }
}

fn parse_base(address: &str) -> Result<Url> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field: "marathon_host",
        reason,
    };

    let url = Url::parse(address.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'")).into()),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()).into());
    }
    Ok(url)
}
