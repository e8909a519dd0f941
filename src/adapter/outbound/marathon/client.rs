//! Marathon v2 REST client.
//!
//! Implements the [`Orchestrator`] port over HTTP. Non-success responses are
//! surfaced as [`OrchestratorError::Status`] with the numeric status code, so
//! callers never need to parse error text.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

use super::transport::{Credentials, MarathonTransport};
use crate::domain::id::ResourceId;
use crate::domain::resource::{Application, Group};
use crate::error::Result;
use crate::port::outbound::orchestrator::{Orchestrator, OrchestratorError, OrchestratorResult};

/// Marathon REST API client.
#[derive(Debug)]
pub struct MarathonClient {
    http: Client,
    /// Base address without trailing slash.
    address: String,
    credentials: Option<Credentials>,
}

impl MarathonClient {
    /// Build a client from its transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(transport: &MarathonTransport) -> Result<Self> {
        Ok(Self {
            http: transport.build_client()?,
            address: transport.base().as_str().trim_end_matches('/').to_string(),
            credentials: transport.auth().cloned(),
        })
    }

    fn apps_url(&self) -> String {
        format!("{}/v2/apps", self.address)
    }

    fn app_url(&self, id: &ResourceId) -> String {
        format!("{}/v2/apps{}", self.address, id.path())
    }

    fn groups_url(&self) -> String {
        format!("{}/v2/groups", self.address)
    }

    fn group_url(&self, id: &ResourceId) -> String {
        format!("{}/v2/groups{}", self.address, id.path())
    }

    async fn send(&self, request: RequestBuilder) -> OrchestratorResult<Response> {
        let request = match &self.credentials {
            Some(c) => request.basic_auth(&c.login, c.password.as_ref()),
            None => request,
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "orchestrator rejected request");
        Err(OrchestratorError::status(status.as_u16(), body.trim()))
    }

    /// GET a resource and require a JSON body.
    async fn fetch(&self, url: String) -> OrchestratorResult<()> {
        let response = self.send(self.http.get(url)).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| OrchestratorError::Decode(e.to_string()))?;
        Ok(())
    }

    async fn post<T: Serialize + ?Sized>(&self, url: String, body: &T) -> OrchestratorResult<()> {
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, url: String) -> OrchestratorResult<()> {
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

/// Flatten a reqwest error and its causes into one message.
fn transport_error(err: reqwest::Error) -> OrchestratorError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    OrchestratorError::Transport(message)
}

#[async_trait]
impl Orchestrator for MarathonClient {
    fn address(&self) -> &str {
        &self.address
    }

    async fn get_app(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.fetch(self.app_url(id)).await
    }

    async fn create_app(&self, app: &Application) -> OrchestratorResult<()> {
        self.post(self.apps_url(), app).await
    }

    async fn update_app(
        &self,
        id: &ResourceId,
        app: &Application,
        force: bool,
    ) -> OrchestratorResult<()> {
        let request = self
            .http
            .put(self.app_url(id))
            .query(&[("force", force)])
            .json(app);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_app(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.delete(self.app_url(id)).await
    }

    async fn get_group(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.fetch(self.group_url(id)).await
    }

    async fn create_group(&self, group: &Group) -> OrchestratorResult<()> {
        self.post(self.groups_url(), group).await
    }

    async fn delete_group(&self, id: &ResourceId) -> OrchestratorResult<()> {
        self.delete(self.group_url(id)).await
    }
}
