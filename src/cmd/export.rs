//! `csv` command: split a report into per-issue CSV files.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use placecheck::config::AuditConfig;
use placecheck::export::export_report;

pub fn cmd_csv(issues_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = AuditConfig::load(config_path)?;
    let written = export_report(issues_path, &config.export)?;

    for path in &written {
        println!("{} Wrote {}", "✓".green(), path.display());
    }

    Ok(())
}
