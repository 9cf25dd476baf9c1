//! CLI entry point and command handlers for placecheck.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "placecheck")]
#[command(version)]
#[command(about = "Audit gazetteer place records for data quality issues", long_about = None)]
struct Cli {
    /// Log level (DEBUG, INFO, WARNING, ERROR)
    #[arg(short = 'l', long = "loglevel", global = true, value_name = "LEVEL")]
    loglevel: Option<String>,
    /// Log at info level
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Log at debug level
    #[arg(short = 'w', long = "veryverbose", global = true)]
    very_verbose: bool,
    /// Hide the progress bar
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit every record below SRCDIR and write DESTDIR/issues.json
    Report {
        /// Directory holding the place records
        srcdir: PathBuf,
        /// Directory for the report (created if missing)
        destdir: PathBuf,
        /// YAML file overriding rule defaults
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Accuracy threshold in meters
        #[arg(long, value_name = "METERS")]
        threshold: Option<f64>,
    },
    /// Write one CSV per issue kind next to an issues.json report
    Csv {
        /// Path to issues.json
        issues_path: PathBuf,
        /// YAML file overriding export defaults
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// Map the logging flags to a filter directive. `None` defers to `RUST_LOG`.
fn log_directive(cli: &Cli) -> Result<Option<&'static str>> {
    if cli.very_verbose {
        return Ok(Some("debug"));
    }
    if cli.verbose {
        return Ok(Some("info"));
    }
    match cli.loglevel.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(None),
        Some("debug") => Ok(Some("debug")),
        Some("info") => Ok(Some("info")),
        Some("warn") | Some("warning") => Ok(Some("warn")),
        Some("error") => Ok(Some("error")),
        Some(other) => anyhow::bail!(
            "Unknown log level '{}'. Use DEBUG, INFO, WARNING or ERROR.",
            other
        ),
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(log_directive(&cli)?);

    match cli.command {
        Commands::Report {
            srcdir,
            destdir,
            config,
            threshold,
        } => cmd::report::cmd_report(
            &cmd::expand_path(&srcdir),
            &cmd::expand_path(&destdir),
            config.as_deref(),
            threshold,
            cli.quiet,
        ),
        Commands::Csv {
            issues_path,
            config,
        } => cmd::export::cmd_csv(&cmd::expand_path(&issues_path), config.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_flags_map_to_levels() {
        let cli = parse(&["placecheck", "-w", "csv", "x.json"]);
        assert_eq!(log_directive(&cli).unwrap(), Some("debug"));

        let cli = parse(&["placecheck", "csv", "x.json", "-v"]);
        assert_eq!(log_directive(&cli).unwrap(), Some("info"));

        let cli = parse(&["placecheck", "-l", "WARNING", "csv", "x.json"]);
        assert_eq!(log_directive(&cli).unwrap(), Some("warn"));

        let cli = parse(&["placecheck", "csv", "x.json"]);
        assert_eq!(log_directive(&cli).unwrap(), None);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let cli = parse(&["placecheck", "--loglevel", "chatty", "csv", "x.json"]);
        assert!(log_directive(&cli).is_err());
    }

    #[test]
    fn test_report_args() {
        let cli = parse(&[
            "placecheck",
            "report",
            "src",
            "dest",
            "--threshold",
            "250",
        ]);
        match cli.command {
            Commands::Report {
                srcdir, threshold, ..
            } => {
                assert_eq!(srcdir, PathBuf::from("src"));
                assert_eq!(threshold, Some(250.0));
            }
            Commands::Csv { .. } => panic!("expected report"),
        }
    }
}
