//! Output formatters for report data
//!
//! Turns a finished [`Report`] into the plain-text summary printed after a
//! report run.

use colored::Colorize;

use crate::report::Report;
use crate::rules::IssueKind;

/// Group the digits of `n` in thousands: `12345` → `12,345`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One summary sentence for `kind`, counting `count` flagged places.
pub fn describe(kind: IssueKind, count: usize, threshold: f64) -> String {
    let n = group_thousands(count as u64);
    match kind {
        IssueKind::RoughNotUnlocated => format!(
            "{} places with 'rough' precision (i.e., no specific geometry), but not marked 'unlocated'.",
            n
        ),
        IssueKind::PoorAccuracy => format!(
            "{} places whose locations have no horizontal accuracy smaller than {} meters.",
            n,
            group_thousands(threshold.round_ties_even().max(0.0) as u64)
        ),
        IssueKind::MissingAccuracy => format!(
            "{} places whose locations have no associated accuracy value.",
            n
        ),
        IssueKind::BadOsmWay => format!(
            "{} places whose locations include an OSM Way that has been incompletely imported as a Node.",
            n
        ),
        IssueKind::BadPlaceType => {
            format!("{} places that make use of a deprecated place type.", n)
        }
        IssueKind::QuestionMarkTitles => {
            format!("{} place titles that include a question mark.", n)
        }
        IssueKind::NamesRomanizedOnly => format!(
            "{} places with names that only have values in the 'romanized' field (no 'attested' field value in original language and script).",
            n
        ),
        IssueKind::MissingModernName => {
            format!("{} places that have no assigned 'modern name'.", n)
        }
        IssueKind::ReferencesWithoutZotero => format!(
            "{} places that have at least one reference without a Zotero URI.",
            n
        ),
        IssueKind::ReferencesWithInvalidZotero => format!(
            "{} places that have at least one reference with an invalid Zotero URI.",
            n
        ),
        IssueKind::EmptyDescription => format!("{} places with an empty description.", n),
        IssueKind::InadequateDescription => format!(
            "{} places whose description is clearly inadequate (i.e., 'cited: BAtlas' or 'A place from the TAVO Index').",
            n
        ),
    }
}

/// Format the summary of `report`.
///
/// The output has a single paragraph of all findings, a rule, then the dated
/// heading followed by one bullet per issue kind in catalog order.
pub fn format_summary(report: &Report, threshold: f64, date: &str) -> String {
    let lines: Vec<String> = IssueKind::ALL
        .into_iter()
        .map(|kind| describe(kind, report.flagged(kind).count(), threshold))
        .collect();

    let mut output = vec![
        lines.join(" "),
        String::new(),
        "-".repeat(78),
        String::new(),
        format!("Placecheck Data Quality Report {}", date)
            .bold()
            .to_string(),
        String::new(),
    ];
    output.extend(lines.iter().map(|line| format!("- {}", line)));
    output.push(String::new());
    output.push(
        format!(
            "{} of {} places have at least one issue.",
            group_thousands(report.summary.problem_count as u64),
            group_thousands(report.summary.place_count as u64)
        )
        .dimmed()
        .to_string(),
    );

    output.join("\n")
}
