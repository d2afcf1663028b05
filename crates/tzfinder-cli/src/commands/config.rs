//! Config command implementation

use crate::config_loader::{load_config, ConfigArgs};
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;

pub fn execute(config_args: ConfigArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(config_args)?;

    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    let credential_configured = config.credential().is_some();

    if output.is_json() {
        output.result(ConfigOutput { credential_configured, entries })?;
        return Ok(());
    }

    output.section("Configuration");
    output.table(entries);

    if !credential_configured {
        output.warning(
            "No API key configured: current location uses local timezone detection and address search is disabled",
        );
    }

    Ok(())
}
