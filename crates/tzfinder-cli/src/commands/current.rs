//! Current command implementation

use super::build_context;
use crate::cli::CurrentArgs;
use crate::config_loader::ConfigArgs;
use crate::errors::CliError;
use crate::output::OutputWriter;
use crate::output_types::CurrentOutput;
use crate::progress::create_spinner;
use crate::render::{RecordKind, RecordView};
use anyhow::Result;
use tzfinder_core::TimeFormatter;
use tzfinder_workflow::{CurrentLocationOutcome, LocationWorkflow, ReportedPosition};

pub async fn execute(args: CurrentArgs, config: ConfigArgs, output: &OutputWriter) -> Result<()> {
    let ctx = build_context(config)?;

    let source = ReportedPosition::from_parts(
        args.lat,
        args.lon,
        args.accuracy,
        args.position_error.map(Into::into),
    )
    .map_err(CliError::from)?;

    let spinner = create_spinner("Getting timezone information...", output.is_json());
    let outcome = LocationWorkflow::new(&ctx).run(&source).await;
    spinner.finish_and_clear();

    let status = outcome.status();

    let record = match outcome {
        CurrentLocationOutcome::Succeeded(record)
        | CurrentLocationOutcome::DegradedFallback(record) => record,
        CurrentLocationOutcome::Failed(e) => {
            let mut error = CliError::from(e);
            if error.context.is_none() {
                error = error.with_context(status.message);
            }
            return Err(error.into());
        }
    };

    let local_time = TimeFormatter::new().format(Some(&record.timezone.name));

    if output.is_json() {
        output.result(CurrentOutput { state: status.state, status, local_time, record })?;
        return Ok(());
    }

    output.success(&status.message);
    if !ctx.config().has_credential() {
        output.info("No API key configured; set TZFINDER_API_KEY for full place details");
    }
    output.line("");
    output.line(RecordView::new(&record, RecordKind::CurrentLocation, local_time));

    Ok(())
}
