//! Tests for CLI argument parsing.

use clap::Parser;
use seo_insight::config::{DEFAULT_TIMEOUT_SECS, LogFormat, LogLevel};
use seo_insight::{AnalysisSelection, OutputFormat};

// The binary's Cli type lives in main.rs and cannot be imported, so this
// mirrors its arguments.
#[derive(Debug, clap::Parser)]
#[command(name = "seo_insight")]
struct TestCli {
    #[arg(default_value = "")]
    url: String,
    #[arg(long)]
    seo: bool,
    #[arg(long)]
    pagespeed: bool,
    #[arg(long)]
    api_base: Option<String>,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
    #[arg(long)]
    no_progress: bool,
    #[arg(long)]
    no_color: bool,
}

#[test]
fn test_cli_defaults() {
    let cli = TestCli::try_parse_from(["seo_insight", "example.com"]).expect("Should parse");

    assert_eq!(cli.url, "example.com");
    assert_eq!(
        AnalysisSelection::from_flags(cli.seo, cli.pagespeed),
        AnalysisSelection::BOTH
    );
    assert_eq!(cli.api_base, None);
    assert_eq!(cli.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert_eq!(cli.output, OutputFormat::Text);
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Info
    );
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert!(!cli.no_progress);
    assert!(!cli.no_color);
}

#[test]
fn test_cli_selection_flags() {
    let cli = TestCli::try_parse_from(["seo_insight", "example.com", "--seo"]).unwrap();
    assert_eq!(
        AnalysisSelection::from_flags(cli.seo, cli.pagespeed),
        AnalysisSelection::SEO_ONLY
    );

    let cli = TestCli::try_parse_from(["seo_insight", "--pagespeed", "example.com"]).unwrap();
    assert_eq!(
        AnalysisSelection::from_flags(cli.seo, cli.pagespeed),
        AnalysisSelection::PAGESPEED_ONLY
    );

    let cli =
        TestCli::try_parse_from(["seo_insight", "example.com", "--seo", "--pagespeed"]).unwrap();
    assert_eq!(
        AnalysisSelection::from_flags(cli.seo, cli.pagespeed),
        AnalysisSelection::BOTH
    );
}

#[test]
fn test_cli_all_options() {
    let cli = TestCli::try_parse_from([
        "seo_insight",
        "https://example.com/page",
        "--api-base",
        "http://backend.internal:9000",
        "--timeout-seconds",
        "30",
        "--output",
        "json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--no-progress",
        "--no-color",
    ])
    .expect("Should parse all options");

    assert_eq!(cli.url, "https://example.com/page");
    assert_eq!(cli.api_base.as_deref(), Some("http://backend.internal:9000"));
    assert_eq!(cli.timeout_seconds, 30);
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(cli.log_format, LogFormat::Json));
    assert!(cli.no_progress);
    assert!(cli.no_color);
}

#[test]
fn test_cli_missing_url_parses_as_empty() {
    // Empty input is rejected later with the user-facing validation message
    let cli = TestCli::try_parse_from(["seo_insight"]).expect("Should parse");
    assert_eq!(cli.url, "");
}

#[test]
fn test_cli_rejects_invalid_values() {
    assert!(TestCli::try_parse_from(["seo_insight", "x.com", "--output", "xml"]).is_err());
    assert!(TestCli::try_parse_from(["seo_insight", "x.com", "--log-level", "loud"]).is_err());
    assert!(
        TestCli::try_parse_from(["seo_insight", "x.com", "--timeout-seconds", "soon"]).is_err()
    );
    assert!(TestCli::try_parse_from(["seo_insight", "x.com", "--unknown"]).is_err());
}
