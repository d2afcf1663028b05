//! Command implementations

mod config;
mod current;
mod search;
mod time;

use crate::cli::{Cli, Commands};
use crate::config_loader::{load_config, ConfigArgs};
use crate::output::OutputWriter;
use anyhow::Result;
use tzfinder_workflow::AppContext;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_args = ConfigArgs::from_cli(&cli);

    match cli.command {
        Commands::Current(args) => current::execute(args, config_args, &output).await,
        Commands::Search(args) => search::execute(args, config_args, &output).await,
        Commands::Time(args) => time::execute(args, &output),
        Commands::Config => config::execute(config_args, &output),
    }
}

/// Resolve configuration and wire the workflows to the Geoapify client
fn build_context(config_args: ConfigArgs) -> Result<AppContext> {
    let config = load_config(config_args)?.resolve();
    Ok(AppContext::from_config(config))
}
