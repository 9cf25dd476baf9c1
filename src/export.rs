//! Per-issue CSV extracts derived from a report.
//!
//! Each issue kind gets one `<kind>.csv` next to the report, with `pid`,
//! `uri` and `title` columns plus the kind-specific detail columns. Multi-valued
//! fields are joined with `|`. Rows are ordered by numeric place ID.

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::place::OwnedReference;
use crate::report::{PlaceEntry, Report};
use crate::rules::IssueKind;

const BASE_COLUMNS: &[&str] = &["pid", "uri", "title"];

/// Detail columns written for `kind`, after the base columns.
pub fn detail_columns(kind: IssueKind) -> &'static [&'static str] {
    match kind {
        IssueKind::PoorAccuracy => &["minimum", "maximum"],
        IssueKind::RoughNotUnlocated | IssueKind::BadPlaceType => &["place_types"],
        IssueKind::NamesRomanizedOnly => &["names"],
        IssueKind::BadOsmWay => &["osm_way_ids"],
        IssueKind::ReferencesWithoutZotero => &["without_zotero"],
        IssueKind::ReferencesWithInvalidZotero => &["invalid_zotero"],
        IssueKind::EmptyDescription | IssueKind::InadequateDescription => &["description"],
        IssueKind::MissingAccuracy
        | IssueKind::QuestionMarkTitles
        | IssueKind::MissingModernName => &[],
    }
}

/// Order place IDs numerically; non-numeric IDs sort after all numeric ones.
fn compare_pids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Escape a value for CSV output
fn csv_escape(value: &str) -> String {
    // If value contains a separator, quote, or line break, wrap in quotes and escape quotes
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}

fn join_references(
    refs: Option<&Vec<OwnedReference>>,
    fields: impl Fn(&OwnedReference) -> [&str; 3],
) -> String {
    refs.map(|refs| {
        refs.iter()
            .map(|r| {
                let [a, b, c] = fields(r);
                format!("{}:{}>{}>{}", r.owner(), a, b, c)
            })
            .collect::<Vec<_>>()
            .join("|")
    })
    .unwrap_or_default()
}

fn detail_values(kind: IssueKind, entry: &PlaceEntry) -> Vec<String> {
    let references = entry.references.as_ref();
    match kind {
        IssueKind::PoorAccuracy => vec![
            format_number(entry.accuracy_min),
            format_number(entry.accuracy_max),
        ],
        IssueKind::RoughNotUnlocated | IssueKind::BadPlaceType => {
            vec![entry.place_types.as_deref().unwrap_or_default().join("|")]
        }
        IssueKind::NamesRomanizedOnly => vec![entry
            .names
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|n| format!("{}:{}:{}", n.0, n.1, n.2.join("/")))
            .collect::<Vec<_>>()
            .join("|")],
        IssueKind::BadOsmWay => vec![entry.osm_way_ids.as_deref().unwrap_or_default().join("|")],
        IssueKind::ReferencesWithoutZotero => vec![join_references(
            references.and_then(|r| r.without_zotero.as_ref()),
            |r| {
                let r = r.reference();
                [
                    r.access_uri.as_str(),
                    r.citation_detail.as_str(),
                    r.formatted_citation.as_str(),
                ]
            },
        )],
        IssueKind::ReferencesWithInvalidZotero => vec![join_references(
            references.and_then(|r| r.with_invalid_zotero.as_ref()),
            |r| {
                let r = r.reference();
                [
                    r.bibliographic_uri.as_str(),
                    r.short_title.as_str(),
                    r.formatted_citation.as_str(),
                ]
            },
        )],
        IssueKind::EmptyDescription | IssueKind::InadequateDescription => {
            vec![entry.description.clone().unwrap_or_default()]
        }
        IssueKind::MissingAccuracy
        | IssueKind::QuestionMarkTitles
        | IssueKind::MissingModernName => vec![],
    }
}

/// Render the CSV for one issue kind.
pub fn render_csv(report: &Report, kind: IssueKind, config: &ExportConfig) -> Result<String> {
    let mut pids: Vec<&str> = report.flagged(kind).collect();
    pids.sort_by(|a, b| compare_pids(a, b));

    let header: Vec<&str> = BASE_COLUMNS
        .iter()
        .chain(detail_columns(kind))
        .copied()
        .collect();

    let mut output = String::new();
    output.push_str(&header.join(","));
    output.push_str("\r\n");

    for pid in pids {
        let entry = report.place(pid).with_context(|| {
            format!(
                "Place {} is flagged for {} but has no entry under 'places'",
                pid, kind
            )
        })?;

        let mut values = vec![
            pid.to_string(),
            format!("{}{}", config.place_uri_base, pid),
            entry.title.clone(),
        ];
        values.extend(detail_values(kind, entry));

        let escaped: Vec<String> = values.iter().map(|v| csv_escape(v)).collect();
        output.push_str(&escaped.join(","));
        output.push_str("\r\n");
    }

    Ok(output)
}

/// Write one CSV per issue kind into `dir`. Returns the written paths in catalog order.
pub fn write_csvs(report: &Report, dir: &Path, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for kind in report.issues.keys() {
        let path = dir.join(format!("{}.csv", kind));
        let content = render_csv(report, *kind, config)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Load the report at `report_path` and write its CSVs beside it.
pub fn export_report(report_path: &Path, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    let report = Report::load(report_path)?;
    let dir = report_path.parent().unwrap_or_else(|| Path::new("."));
    write_csvs(&report, dir, config)
}
