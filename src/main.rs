// LogTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. One pipeline run over the given log file
// 4. Report rendering to stdout and optional export

use clap::Parser;
use logtally::app::{pipeline, render};
use logtally::core::export::ExportFormat;
use logtally::platform::config::{load_config, load_explicit_config, AppConfig, PlatformPaths};
use logtally::util::error::{ConfigError, InputError, LogTallyError, Result};
use logtally::util::{constants, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// LogTally - per-level log summary.
///
/// Counts INFO, ERROR, DEBUG and WARNING lines in a log file and optionally
/// lists the lines of one level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse.
    path: PathBuf,

    /// Show details for this level (case-insensitive, any level name).
    level: Option<String>,

    /// Write the listed records (or all records when no level is given)
    /// to this file.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Export format: csv or json. Defaults to [export] format in config.toml.
    #[arg(short = 'f', long = "format")]
    format: Option<String>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config_path, config, config_problems) = match load_settings(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(cli.debug, None);
            return report_failure(e);
        }
    };

    logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LogTally starting"
    );
    for problem in &config_problems {
        tracing::warn!(error = %problem, "Config problem; using default");
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(e),
    }
}

/// Resolve and load config. An explicit `--config` must exist; the
/// platform default may be absent.
fn load_settings(cli: &Cli) -> Result<(PathBuf, AppConfig, Vec<ConfigError>)> {
    match cli.config {
        Some(ref path) => {
            let (config, problems) = load_explicit_config(path)?;
            Ok((path.clone(), config, problems))
        }
        None => {
            let path = PlatformPaths::resolve().config_file;
            let (config, problems) = load_config(&path);
            Ok((path, config, problems))
        }
    }
}

fn report_failure(e: LogTallyError) -> ExitCode {
    match e {
        LogTallyError::Input(InputError::NotFound { path }) => {
            println!("File {} not found.", path.display());
        }
        e => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
        }
    }
    ExitCode::FAILURE
}

fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    // --format only matters with --export; check it before reading the log.
    let format = match (&cli.export, cli.format.as_deref()) {
        (Some(_), Some(raw)) => Some(raw.parse::<ExportFormat>()?),
        (Some(_), None) => Some(config.export_format),
        (None, _) => None,
    };

    let report = pipeline::run(&cli.path, cli.level.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::render_report(&report, &mut out).map_err(|e| LogTallyError::Render { source: e })?;

    if let (Some(earliest), Some(latest)) = (report.earliest, report.latest) {
        tracing::info!(%earliest, %latest, "Log time span");
    }

    if let (Some(export_path), Some(format)) = (&cli.export, format) {
        pipeline::export_to_file(
            report.export_set(),
            export_path,
            format,
            config.export_max_records,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logtally::util::error::ExportError;
    use std::fs;

    fn sample_log() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "2024-01-01 10:00:00 INFO Service started\n").unwrap();
        (dir, path)
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("logtally").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_format_ignored_without_export() {
        let (_dir, log) = sample_log();
        let cli = parse(&[log.to_str().unwrap(), "--format", "xml"]);
        assert!(run(&cli, &AppConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_format_rejected_with_export() {
        let (dir, log) = sample_log();
        let out = dir.path().join("out.xml");
        let cli = parse(&[
            log.to_str().unwrap(),
            "--export",
            out.to_str().unwrap(),
            "--format",
            "xml",
        ]);

        let result = run(&cli, &AppConfig::default());
        assert!(
            matches!(
                result,
                Err(LogTallyError::Export(ExportError::UnknownFormat { .. }))
            ),
            "expected UnknownFormat, got {result:?}"
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_explicit_missing_config_is_fatal() {
        let (dir, log) = sample_log();
        let missing = dir.path().join("typo.toml");
        let cli = parse(&[log.to_str().unwrap(), "--config", missing.to_str().unwrap()]);

        let result = load_settings(&cli);
        assert!(
            matches!(result, Err(LogTallyError::Config(ConfigError::Io { .. }))),
            "expected Config(Io), got {result:?}"
        );
    }

    #[test]
    fn test_explicit_config_is_used() {
        let (dir, log) = sample_log();
        let config_path = dir.path().join("custom.toml");
        fs::write(&config_path, "[export]\nmax_records = 7\n").unwrap();
        let cli = parse(&[log.to_str().unwrap(), "-c", config_path.to_str().unwrap()]);

        let (path, config, problems) = load_settings(&cli).unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.export_max_records, 7);
        assert!(problems.is_empty());
    }
}
