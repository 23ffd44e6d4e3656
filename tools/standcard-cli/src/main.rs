//! Standcard CLI: build standings cards from the command line.
//!
//! Usage:
//!   standcard start                 Show how to use the table command
//!   standcard reg-table <MESSAGE>   Run a /reg_table request end to end
//!   standcard render [OPTIONS]      Render a card from a JSON export
//!   standcard layout                Print the built-in layout
//!   standcard check                 Verify template, font, and layout

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use standcard_common::config::AppConfig;

mod commands;
mod delivery;

#[derive(Parser)]
#[command(
    name = "standcard",
    about = "Tournament standings cards from spreadsheet rows",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/standcard/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Resource paths that override the config file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ResourceArgs {
    /// Template image
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Font file
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Layout JSON file
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the table command usage
    Start,

    /// Run a table registration message: fetch, filter, render, deliver
    RegTable {
        /// The full message, e.g. "/reg_table WinterCup MEOW Group <link>"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        message: Vec<String>,

        #[command(flatten)]
        resources: ResourceArgs,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a card from a JSON array of rows
    Render {
        /// JSON file with one object per row
        #[arg(short, long)]
        records: PathBuf,

        /// Organization filter (case-insensitive substring of the team name)
        #[arg(long, default_value = "")]
        org: String,

        /// Title (tournament name)
        #[arg(long)]
        title: String,

        /// Subtitle (stage name)
        #[arg(long, default_value = "")]
        subtitle: String,

        #[command(flatten)]
        resources: ResourceArgs,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the draw commands as JSON instead of rendering
        #[arg(long)]
        dry_run: bool,
    },

    /// Print or write the built-in layout as JSON
    Layout {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the template, font, and layout load
    Check {
        #[command(flatten)]
        resources: ResourceArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    standcard_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Start => {
            println!("{}", standcard_table_model::command::usage());
            Ok(())
        }
        Commands::RegTable {
            message,
            resources,
            output,
        } => commands::reg_table::run(&config, message.join(" "), resources, output).await,
        Commands::Render {
            records,
            org,
            title,
            subtitle,
            resources,
            output,
            dry_run,
        } => {
            commands::render::run(
                &config, records, org, title, subtitle, resources, output, dry_run,
            )
            .await
        }
        Commands::Layout { output } => commands::layout::run(output),
        Commands::Check { resources } => commands::check::run(&config, resources),
    }
}
