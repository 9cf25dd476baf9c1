//! Fold per-place evaluations into corpus-wide issue state.
//!
//! The [`Aggregator`] owns the three pieces of state a report run builds up:
//! the set of flagged place IDs per issue kind, per-place detail payloads per
//! issue kind, and the display data of every place with at least one issue.
//! It is consumed by [`Aggregator::finalize`] once the whole corpus has been
//! absorbed.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::evaluate::Evaluation;
use crate::place::Place;
use crate::report::{Report, Summary};
use crate::rules::{Detail, IssueKind};

#[derive(Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// The same place was recorded with two different descriptions.
    DescriptionConflict {
        place_id: String,
        existing: String,
        incoming: String,
    },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::DescriptionConflict {
                place_id,
                existing,
                incoming,
            } => write!(
                f,
                "Multiple different descriptions for same place ({}): '{}' vs. '{}'",
                place_id, existing, incoming
            ),
        }
    }
}

impl std::error::Error for AggregateError {}

/// Display data kept for places that have at least one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedPlace {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    issues: BTreeMap<IssueKind, BTreeSet<String>>,
    details: BTreeMap<IssueKind, BTreeMap<String, Detail>>,
    retained: BTreeMap<String, RetainedPlace>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            issues: IssueKind::ALL
                .into_iter()
                .map(|k| (k, BTreeSet::new()))
                .collect(),
            details: BTreeMap::new(),
            retained: BTreeMap::new(),
        }
    }

    /// Record the evaluation of `place`.
    ///
    /// Places without issues leave no trace. Fails without modifying any state
    /// if the evaluation carries a description that differs from one already
    /// recorded for the same place.
    pub fn absorb(&mut self, place: &Place, evaluation: Evaluation) -> Result<(), AggregateError> {
        if !evaluation.has_problem() {
            return Ok(());
        }
        let pid = place.id();

        self.check_incoming_descriptions(pid, &evaluation)?;

        for kind in &evaluation.kinds {
            self.issues.entry(*kind).or_default().insert(pid.to_string());
        }
        for (kind, detail) in evaluation.details {
            self.details
                .entry(kind)
                .or_default()
                .insert(pid.to_string(), detail);
        }
        self.retained.insert(
            pid.to_string(),
            RetainedPlace {
                title: place.title().to_string(),
            },
        );

        Ok(())
    }

    /// Descriptions carried by `evaluation` must agree with each other and
    /// with anything already recorded for `pid`.
    fn check_incoming_descriptions(
        &self,
        pid: &str,
        evaluation: &Evaluation,
    ) -> Result<(), AggregateError> {
        let incoming: Vec<&String> = evaluation
            .details
            .iter()
            .filter_map(|(kind, detail)| match detail {
                Detail::Description(text) if kind.is_description() => Some(text),
                _ => None,
            })
            .collect();

        if let [first, rest @ ..] = incoming.as_slice() {
            if let Some(other) = rest.iter().find(|t| *t != first) {
                return Err(AggregateError::DescriptionConflict {
                    place_id: pid.to_string(),
                    existing: (*first).clone(),
                    incoming: (*other).clone(),
                });
            }
        }
        for text in incoming {
            self.check_description(pid, text)?;
        }

        Ok(())
    }

    fn check_description(&self, pid: &str, text: &str) -> Result<(), AggregateError> {
        let recorded = IssueKind::ALL
            .into_iter()
            .filter(|k| k.is_description())
            .filter_map(|k| self.details.get(&k)?.get(pid));

        for detail in recorded {
            if let Detail::Description(existing) = detail {
                if existing != text {
                    return Err(AggregateError::DescriptionConflict {
                        place_id: pid.to_string(),
                        existing: existing.clone(),
                        incoming: text.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// IDs of places flagged with `kind`.
    pub fn flagged(&self, kind: IssueKind) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.issues.get(&kind).unwrap_or(&EMPTY)
    }

    pub fn detail(&self, kind: IssueKind, pid: &str) -> Option<&Detail> {
        self.details.get(&kind)?.get(pid)
    }

    pub fn retained(&self, pid: &str) -> Option<&RetainedPlace> {
        self.retained.get(pid)
    }

    /// Number of distinct places with at least one issue.
    pub fn problem_count(&self) -> usize {
        self.retained.len()
    }

    /// Counts per issue kind plus corpus totals.
    pub fn summary(&self, place_count: usize) -> Summary {
        Summary {
            place_count,
            problem_count: self.problem_count(),
            counts: self
                .issues
                .iter()
                .map(|(kind, ids)| (*kind, ids.len()))
                .collect(),
        }
    }

    /// Close the run and assemble the report. `place_count` is the number of
    /// places evaluated, with or without issues.
    pub fn finalize(self, place_count: usize) -> Report {
        let summary = self.summary(place_count);
        for (kind, count) in &summary.counts {
            tracing::info!("{}: {}", kind, count);
        }
        tracing::info!("Total problem place count: {}", summary.problem_count);

        let titles = self
            .retained
            .into_iter()
            .map(|(pid, place)| (pid, place.title))
            .collect();
        Report::assemble(self.issues, self.details, titles, summary)
    }
}
