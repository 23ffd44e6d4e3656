//! Check rendering resources.

use standcard_common::config::AppConfig;
use standcard_render_engine::painter::GlyphPainter;
use standcard_render_engine::render::load_template;
use standcard_table_model::layout::Layout;

use super::Resources;
use crate::ResourceArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    Fail,
    Warn,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Fail => "FAIL",
            Status::Warn => "WARN",
        }
    }
}

pub fn run(config: &AppConfig, args: ResourceArgs) -> anyhow::Result<()> {
    println!("Standcard Resource Check");
    println!("{}", "=".repeat(50));

    let results = check_resources(config, &args);
    for (status, line) in &results {
        println!("[{}] {line}", status.label());
    }

    println!();
    if results.iter().any(|(status, _)| *status == Status::Fail) {
        anyhow::bail!("Some rendering resources are missing. See above for fixes.");
    }
    println!("All rendering resources are available.");
    Ok(())
}

/// Check every resource, continuing past failures.
fn check_resources(config: &AppConfig, args: &ResourceArgs) -> Vec<(Status, String)> {
    let mut results = Vec::new();

    let layout = match Resources::resolve_layout(config, args) {
        Ok(layout) => {
            results.push((
                Status::Ok,
                format!(
                    "Layout: rows from y={} every {}px",
                    layout.base_y, layout.step_y
                ),
            ));
            layout
        }
        Err(e) => {
            results.push((Status::Fail, format!("Layout: {e}")));
            Layout::default()
        }
    };
    let resources = Resources::with_layout(config, args, layout);

    results.push(match load_template(&resources.template_path) {
        Ok(template) => (
            Status::Ok,
            format!(
                "Template: {} ({}x{})",
                resources.template_path.display(),
                template.width(),
                template.height()
            ),
        ),
        Err(e) => (Status::Fail, e.to_string()),
    });

    results.push(match GlyphPainter::load(&resources.font_path) {
        Ok(_) => (
            Status::Ok,
            format!("Font: {}", resources.font_path.display()),
        ),
        Err(e) => (Status::Fail, e.to_string()),
    });

    results.push(if config.sheets_api_key().is_some() {
        (
            Status::Ok,
            format!("Sheets API key: ${}", config.sheets.api_key_env),
        )
    } else {
        (
            Status::Warn,
            format!(
                "Sheets API key: ${} is not set (reg-table will fail)",
                config.sheets.api_key_env
            ),
        )
    });

    results
}
