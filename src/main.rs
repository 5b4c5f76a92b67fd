//! Auto Sales Dashboard CLI
//!
//! Computes the recession and yearly statistics charts for a selection
//! and writes them as a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use auto_sales_dashboard::commands::{
    display_schema, display_version, execute_check, execute_report, validate_args,
    validate_report_file, ReportArgs,
};
use auto_sales_dashboard::dataset::DataSource;
use auto_sales_dashboard::report::ReportSelection;
use auto_sales_dashboard::utils::config::DEFAULT_DATA_URL;

/// Auto Sales Dashboard - automobile sales statistics reports
#[derive(Parser, Debug)]
#[command(name = "auto-sales")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the charts for a selection
    Report {
        /// CSV path or http(s) URL
        #[arg(short, long, env = "AUTO_SALES_DATA", default_value = DEFAULT_DATA_URL)]
        data: String,

        /// "Yearly Statistics" or "Recession Period Statistics" (or yearly / recession)
        #[arg(short, long, default_value = "Select Statistics")]
        report: String,

        /// Year for yearly statistics (1980-2023)
        #[arg(short, long)]
        year: Option<String>,

        /// Output path for JSON report (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Load a dataset and check it against the schema
    Check {
        /// CSV path or http(s) URL
        #[arg(short, long, env = "AUTO_SALES_DATA", default_value = DEFAULT_DATA_URL)]
        data: String,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            data,
            report,
            year,
            mut output,
            summary,
        } => {
            // Ensure outputs go to artifacts/ if no directory is specified
            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = PathBuf::from("artifacts").join(output);
            }

            let args = ReportArgs {
                data_source: DataSource::parse(&data),
                selection: ReportSelection::from_labels(&report, year.as_deref()),
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Check { data } => {
            execute_check(&DataSource::parse(&data))?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
