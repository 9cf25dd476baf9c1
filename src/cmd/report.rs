//! `report` command: audit a corpus and write `issues.json`.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use placecheck::config::AuditConfig;
use placecheck::corpus::{discover_records, Audit};
use placecheck::formatters::format_summary;

fn progress_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

pub fn cmd_report(
    srcdir: &Path,
    destdir: &Path,
    config_path: Option<&Path>,
    threshold: Option<f64>,
    quiet: bool,
) -> Result<()> {
    let mut config = AuditConfig::load(config_path)?;
    if let Some(threshold) = threshold {
        config = config.with_accuracy_threshold(threshold)?;
    }

    let paths = discover_records(srcdir, &config.corpus.extension)?;
    let pb = progress_bar(paths.len(), quiet);
    let mut audit = Audit::new(config.rules.clone());

    for path in &paths {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().to_string());
        }
        let outcome = audit.process_file(path);
        pb.inc(1);
        if let Err(e) = outcome {
            pb.abandon();
            return Err(e);
        }
    }
    pb.finish_and_clear();

    let skipped = audit.skipped().to_vec();
    let report = audit.finish();
    let report_path = report.write_to_dir(destdir)?;

    if !skipped.is_empty() {
        eprintln!(
            "{} {} record files could not be loaded:",
            "Warning:".yellow(),
            skipped.len()
        );
        for record in &skipped {
            eprintln!("  {} {}: {}", "✗".red(), record.path.display(), record.reason);
        }
    }

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    println!(
        "{}",
        format_summary(&report, config.rules.accuracy_threshold, &date)
    );
    println!();
    println!("{} Wrote {}", "✓".green(), report_path.display());

    Ok(())
}
