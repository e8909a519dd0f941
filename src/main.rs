use clap::Parser;

use marathon_deploy::adapter::inbound::cli::command::{CheckCommand, Cli, ColorChoice, Commands};
use marathon_deploy::adapter::inbound::cli::output::{self, OutputConfig};
use marathon_deploy::adapter::inbound::cli::{check, deploy, operator};
use marathon_deploy::error::Result;
use marathon_deploy::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command).await {
        output::error(&e.report());
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Deploy(args) => deploy::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(args),
    }
}
