//! Apply the whole rule catalog to one place.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RuleConfig;
use crate::place::Place;
use crate::rules::{Detail, IssueKind, CATALOG};

/// Everything the catalog found wrong with one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub kinds: BTreeSet<IssueKind>,
    pub details: BTreeMap<IssueKind, Detail>,
}

impl Evaluation {
    pub fn has_problem(&self) -> bool {
        !self.kinds.is_empty()
    }

    pub fn contains(&self, kind: IssueKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Run every rule against `place`. No rule short-circuits another.
pub fn evaluate(place: &Place, config: &RuleConfig) -> Evaluation {
    let precise = place.precise();
    let mut evaluation = Evaluation::default();

    for rule in CATALOG {
        if rule.precise_only && !precise {
            continue;
        }
        if let Some(finding) = (rule.check)(place, config) {
            evaluation.kinds.insert(rule.kind);
            if let Some(detail) = finding.detail {
                evaluation.details.insert(rule.kind, detail);
            }
        }
    }

    if evaluation.has_problem() {
        tracing::debug!(
            place = %place.id(),
            features = place.feature_count(),
            issues = ?evaluation.kinds,
            "place has issues"
        );
    }

    evaluation
}
