//! Search command implementation

use super::build_context;
use crate::cli::SearchArgs;
use crate::config_loader::ConfigArgs;
use crate::errors::CliError;
use crate::interactive::prompt_address;
use crate::output::OutputWriter;
use crate::output_types::SearchOutput;
use crate::progress::create_spinner;
use crate::render::{RecordKind, RecordView};
use anyhow::Result;
use tzfinder_core::{FailureKind, TimeFormatter};
use tzfinder_workflow::{search_address, SearchOutcome};

pub async fn execute(args: SearchArgs, config: ConfigArgs, output: &OutputWriter) -> Result<()> {
    let ctx = build_context(config)?;

    let query = if args.interactive {
        prompt_address()?
    } else {
        args.address.unwrap_or_default()
    };

    let spinner = create_spinner(&format!("Searching for {}...", query.trim()), output.is_json());
    let outcome = search_address(&ctx, &query).await;
    spinner.finish_and_clear();

    let (record, notice) = match outcome {
        SearchOutcome::Found { record, notice } => (record, notice),
        SearchOutcome::Rejected(e) | SearchOutcome::Failed(e) => {
            return Err(CliError::from(e).into());
        }
        SearchOutcome::Skipped => {
            return Err(CliError::new("A search is already in progress")
                .with_kind(FailureKind::ValidationError)
                .into());
        }
    };

    let local_time = TimeFormatter::new().format(Some(&record.timezone.name));

    if output.is_json() {
        output.result(SearchOutput {
            query: query.trim().to_string(),
            notice: notice.to_string(),
            local_time,
            record,
        })?;
        return Ok(());
    }

    output.success(notice);
    output.line("");
    output.line(RecordView::new(&record, RecordKind::SearchResult, local_time));

    Ok(())
}
