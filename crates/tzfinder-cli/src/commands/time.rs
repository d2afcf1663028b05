//! Time command implementation

use crate::cli::TimeArgs;
use crate::errors::CliError;
use crate::output::OutputWriter;
use crate::output_types::TimeOutput;
use anyhow::Result;
use tzfinder_core::time::parse_zone;
use tzfinder_core::TimeFormatter;

pub fn execute(args: TimeArgs, output: &OutputWriter) -> Result<()> {
    let zone = args.zone.trim().to_string();

    parse_zone(&zone).map_err(|e| {
        CliError::from(e)
            .with_suggestion("Use an IANA zone name such as Europe/Paris or America/New_York")
    })?;

    let local_time = TimeFormatter::new().format(Some(&zone));

    if output.is_json() {
        output.result(TimeOutput { zone, local_time })?;
    } else {
        output.kv(&zone, local_time);
    }

    Ok(())
}
