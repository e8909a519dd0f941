//! marathon-deploy - reconcile Marathon application and group descriptors.
//!
//! Reads a Marathon JSON descriptor, asks the orchestrator whether the
//! resource already exists and converges it: create when absent, update in
//! place when present, or delete and recreate when configured to.
//!
//! # Architecture
//!
//! - **`domain`** - Resource ids, applications, group trees, policies, outcomes
//! - **`port`** - Inbound operator traits and the outbound orchestrator trait
//! - **`application`** - The reconciler and its existence checks
//! - **`adapter`** - CLI, descriptor decoding and the Marathon REST client
//! - **`infrastructure`** - Layered configuration, logging and wiring
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marathon_deploy::adapter::outbound::marathon::client::MarathonClient;
//! use marathon_deploy::adapter::outbound::marathon::transport::MarathonTransport;
//! use marathon_deploy::application::reconcile::reconciler::Reconciler;
//! use marathon_deploy::domain::policy::{DeployTarget, ReconcilePolicy};
//! use marathon_deploy::domain::resource::Application;
//!
//! # async fn run() -> marathon_deploy::error::Result<()> {
//! let transport = MarathonTransport::new("http://marathon.example.com:8080")?;
//! let client = Arc::new(MarathonClient::new(&transport)?);
//! let reconciler = Reconciler::new(client, ReconcilePolicy::update_in_place());
//!
//! let app = Application::new("/svc/api").with("instances", serde_json::json!(2));
//! let outcome = reconciler.reconcile(&DeployTarget::Application(app)).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
