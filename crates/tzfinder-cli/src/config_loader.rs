//! Configuration loading utilities for CLI commands

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tzfinder_core::config::{CliConfigOverrides, LayeredConfig};

/// Used when `--config` is not given and the file exists
pub const DEFAULT_CONFIG_FILE: &str = "tzfinder.toml";

/// Global flags that take part in configuration
#[derive(Debug, Default)]
pub struct ConfigArgs {
    pub path: Option<PathBuf>,
    pub overrides: CliConfigOverrides,
}

impl ConfigArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            path: cli.config.clone(),
            overrides: CliConfigOverrides {
                api_key: cli.api_key.clone(),
                base_url: cli.base_url.clone(),
                request_timeout_ms: cli.timeout_ms,
                min_address_length: None,
            },
        }
    }
}

/// Load layered configuration: defaults, file, environment, then flags
///
/// An explicit `--config` path must exist; the default file is optional.
pub fn load_config(args: ConfigArgs) -> Result<LayeredConfig> {
    let config = match &args.path {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(Path::new(DEFAULT_CONFIG_FILE))
            .context("Failed to load configuration file")?,
    };

    let mut config = config.load_from_env();
    config.update_from_cli(args.overrides);
    Ok(config)
}
