//! Run a `/reg_table` request: fetch the sheet, filter by organization,
//! render the card, and deliver it.

use std::path::PathBuf;

use standcard_common::config::AppConfig;
use standcard_common::error::StandcardResult;
use standcard_render_engine::delivery::ImageSink;
use standcard_render_engine::render::{render_job_blocking, RenderReport};
use standcard_selector::select::require_matches;
use standcard_sheet_source::{RecordSource, SheetLink, SheetsApiSource};
use standcard_table_model::command::RegTableCommand;

use super::Resources;
use crate::delivery::ConsoleSink;
use crate::ResourceArgs;

pub async fn run(
    config: &AppConfig,
    message: String,
    args: ResourceArgs,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let output_path = output.unwrap_or_else(|| config.output.path.clone());

    let result: StandcardResult<RenderReport> = async {
        let command = RegTableCommand::parse(&message)?;
        let resources = Resources::resolve(config, &args)?;
        let link = SheetLink::parse(&command.link)?;
        let source = SheetsApiSource::from_env(link, &config.sheets)?;
        execute(command, &source, &ConsoleSink, &resources, output_path).await
    }
    .await;

    match result {
        Ok(report) => {
            tracing::debug!(rows = report.rows_drawn, "Request complete");
            Ok(())
        }
        Err(e) => {
            if e.is_no_match() {
                tracing::info!(error = %e, "No matching teams");
            } else {
                tracing::error!(error = %e, "Table request failed");
            }
            anyhow::bail!(e.user_message());
        }
    }
}

/// The request flow behind the chat command, independent of where rows come
/// from and where the card goes.
pub async fn execute(
    command: RegTableCommand,
    source: &dyn RecordSource,
    sink: &dyn ImageSink,
    resources: &Resources,
    output_path: PathBuf,
) -> StandcardResult<RenderReport> {
    tracing::info!(
        tournament = %command.tournament,
        organization = %command.organization,
        stage = %command.stage,
        source = %source.describe(),
        "Handling table request"
    );

    let records = source.fetch_records().await?;
    let selected = require_matches(&records, &command.organization)?;

    let job = resources.job(
        command.tournament,
        command.organization,
        command.stage,
        selected,
        output_path,
    );
    let caption = job.caption();

    let report = render_job_blocking(job).await?;
    sink.send_image(&report.output_path, &caption).await?;

    tracing::info!(sink = sink.name(), "Card delivered");
    Ok(report)
}
