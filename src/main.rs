// LogSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (config.toml)
// 3. Logging initialisation (debug mode support)
// 4. The filter run and the summary report

use clap::Parser;
use std::path::PathBuf;

use logsift::app;
use logsift::core::export;
use logsift::core::filter::FilterCriteria;
use logsift::platform;
use logsift::util;

/// LogSift - Filter pipe-delimited log files by level and service.
///
/// Reads `logs.txt` from the current directory, keeps the lines that parse
/// as `timestamp | LEVEL | service | message` and match the given filters,
/// and writes them to the output file. A three-line summary is printed to
/// stdout; diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    /// Keep only records with this level (case-insensitive).
    #[arg(short = 'l', long = "level")]
    level: Option<String>,

    /// Keep only records from this service (exact, case-sensitive).
    #[arg(short = 's', long = "service")]
    service: Option<String>,

    /// Output file for matching records [default: filtered_logs.txt].
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init, so the
    // configured log level can participate in filter selection. Config
    // warnings are returned as data and logged once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogSift starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let criteria = FilterCriteria::from_args(cli.level, cli.service);
    if !criteria.is_empty() {
        tracing::debug!(
            level = criteria.level.as_deref().unwrap_or("-"),
            service = criteria.service.as_deref().unwrap_or("-"),
            "Filters active"
        );
    }

    let options = app::run::RunOptions {
        input_path: PathBuf::from(util::constants::INPUT_FILE),
        output_path: cli.out.unwrap_or(config.default_output),
        criteria,
    };

    let summary = match app::run::run(&options) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "Filter run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // The summary report is the only thing ever written to stdout.
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = export::write_summary(&mut stdout, &summary) {
        tracing::error!(error = %e, "Failed to write summary report");
        eprintln!("Error: failed to write summary report: {e}");
        std::process::exit(1);
    }
}
