//! Command-line interface definitions.
//!
//! Defines the CLI structure for marathon-deploy using `clap`. Every flag
//! that maps to a setting is optional and only overrides the configuration
//! file and environment when given.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::port::inbound::operator::deploy::DeployRequest;

/// Deploy Marathon applications and groups
#[derive(Parser, Debug)]
#[command(name = "marathon-deploy")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the descriptor to Marathon (create, update or recreate)
    Deploy(DeployArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `marathon-deploy check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate settings and the descriptor without contacting Marathon.
    Config(DeployArgs),
}

/// Deployment settings shared by `deploy` and `check config`.
#[derive(Parser, Debug, Default)]
pub struct DeployArgs {
    /// Path to the configuration file [default: marathon-deploy.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Marathon base address, e.g. http://marathon.example.com:8080
    #[arg(long, value_name = "URL")]
    pub marathon_host: Option<String>,

    /// Basic-auth login
    #[arg(long)]
    pub login: Option<String>,

    /// Basic-auth password
    #[arg(long)]
    pub password: Option<String>,

    /// Skip TLS certificate and hostname verification
    #[arg(long)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Descriptor file [default: target/marathon.json]
    #[arg(short = 'f', long)]
    pub descriptor: Option<PathBuf>,

    /// The descriptor is a group rather than a single application
    #[arg(long)]
    pub group: bool,

    /// Delete an existing resource and create it again instead of updating
    #[arg(long)]
    pub delete_before_deploy: bool,

    /// Log level or filter directive (e.g. debug, marathon_deploy=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl DeployArgs {
    /// Convert into an operator request carrying the loaded config content.
    #[must_use]
    pub fn into_request(self, config_toml: Option<String>) -> DeployRequest {
        DeployRequest {
            config_toml,
            marathon_host: self.marathon_host,
            login: self.login,
            password: self.password,
            insecure: self.insecure,
            timeout_secs: self.timeout,
            descriptor: self.descriptor.map(|path| path.display().to_string()),
            group: self.group,
            delete_before_deploy: self.delete_before_deploy,
            log_level: self.log_level,
            json_logs: self.json_logs,
        }
    }
}
