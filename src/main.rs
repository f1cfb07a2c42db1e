//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_insight` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the rendered report and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use seo_insight::config::{API_BASE_ENV_VAR, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use seo_insight::initialization::init_logger_with;
use seo_insight::{
    render, run_analysis, AnalysisSelection, Config, LogFormat, LogLevel, OutputFormat,
    RenderOptions,
};

/// Analyze a page's meta tags and PageSpeed performance through an SEO backend.
#[derive(Debug, Parser)]
#[command(name = "seo_insight", version, about)]
struct Cli {
    /// URL to analyze (https:// is added when no scheme is given)
    #[arg(default_value = "")]
    url: String,

    /// Run the SEO meta-tag analysis
    #[arg(long)]
    seo: bool,

    /// Run the PageSpeed analysis
    #[arg(long)]
    pagespeed: bool,

    /// Base URL of the analysis backend [env: SEO_INSIGHT_API_BASE] [default: http://localhost:8000]
    #[arg(long)]
    api_base: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Disable progress messages while waiting for the backend
    #[arg(long)]
    no_progress: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let api_base = cli
            .api_base
            .or_else(|| std::env::var(API_BASE_ENV_VAR).ok())
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Config {
            url: cli.url,
            selection: AnalysisSelection::from_flags(cli.seo, cli.pagespeed),
            api_base,
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level,
            log_format: cli.log_format,
            output: cli.output,
            color: !cli.no_color && std::io::stdout().is_terminal(),
            show_progress: !cli.no_progress,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting SEO_INSIGHT_API_BASE without exporting it manually
    let _ = dotenvy::dotenv();

    // Usage errors exit with 1; exit code 2 means partial failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    let config = Config::from(cli);

    colored::control::set_override(config.color);
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let output = config.output;
    let options = RenderOptions {
        color: config.color,
    };

    match run_analysis(config).await {
        Ok(run) => {
            if let Some(report) = &run.report {
                let rendered = render(report, output, options).context("Failed to render report")?;
                print!("{rendered}");
            }
            process::exit(run.status.exit_code());
        }
        Err(e) => {
            eprintln!("seo_insight error: {:#}", e);
            process::exit(1);
        }
    }
}
