//! Render a card from a JSON export.

use std::path::PathBuf;

use standcard_common::config::AppConfig;
use standcard_common::error::StandcardResult;
use standcard_render_engine::painter::RecordingPainter;
use standcard_render_engine::render::{load_template, render_card, render_job_blocking};
use standcard_selector::select::require_matches;
use standcard_sheet_source::{JsonFileSource, RecordSource};

use super::Resources;
use crate::ResourceArgs;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: &AppConfig,
    records_path: PathBuf,
    org: String,
    title: String,
    subtitle: String,
    args: ResourceArgs,
    output: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let result = render(
        config,
        records_path,
        org,
        title,
        subtitle,
        args,
        output,
        dry_run,
    )
    .await;

    if let Err(e) = result {
        tracing::error!(error = %e, "Render failed");
        anyhow::bail!(e.user_message());
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn render(
    config: &AppConfig,
    records_path: PathBuf,
    org: String,
    title: String,
    subtitle: String,
    args: ResourceArgs,
    output: Option<PathBuf>,
    dry_run: bool,
) -> StandcardResult<()> {
    let resources = Resources::resolve(config, &args)?;
    let source = JsonFileSource::new(&records_path);

    println!("Loading records from: {}", records_path.display());
    let records = source.fetch_records().await?;
    println!("  Loaded {} rows", records.len());

    let selected = require_matches(&records, &org)?;
    println!("  Selected {} rows matching {:?}", selected.len(), org);

    if dry_run {
        let template = load_template(&resources.template_path)?;
        let mut painter = RecordingPainter::new();
        let (_, composition) = render_card(
            &template,
            &title,
            &subtitle,
            &selected,
            &resources.layout,
            &mut painter,
        );
        println!("{}", serde_json::to_string_pretty(&painter.commands)?);
        if composition.pagination.truncated() {
            println!(
                "  {} rows do not fit on the card and would be left off",
                composition.pagination.dropped
            );
        }
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| config.output.path.clone());
    let job = resources.job(title, org, subtitle, selected, output_path);

    let report = render_job_blocking(job).await?;
    println!(
        "Card written: {} ({}x{}, {} rows)",
        report.output_path.display(),
        report.width,
        report.height,
        report.rows_drawn
    );
    if report.rows_dropped > 0 {
        println!(
            "  {} rows did not fit and were left off",
            report.rows_dropped
        );
    }

    Ok(())
}
