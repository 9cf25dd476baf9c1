//! The catalog of data-quality rules.
//!
//! Each rule is a pure check over one [`Place`]: it either finds nothing or
//! returns a [`Finding`], optionally carrying a detail payload for the report.
//! Rules never depend on each other or on other records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::RuleConfig;
use crate::place::{AccuracyBounds, OwnedReference, Place};

pub mod geometry;
pub mod names;
pub mod references;
pub mod text;
pub mod typology;

/// Kinds of issue the audit reports, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    RoughNotUnlocated,
    PoorAccuracy,
    MissingAccuracy,
    BadOsmWay,
    BadPlaceType,
    QuestionMarkTitles,
    NamesRomanizedOnly,
    MissingModernName,
    ReferencesWithoutZotero,
    ReferencesWithInvalidZotero,
    EmptyDescription,
    InadequateDescription,
}

impl IssueKind {
    pub const ALL: [IssueKind; 12] = [
        IssueKind::RoughNotUnlocated,
        IssueKind::PoorAccuracy,
        IssueKind::MissingAccuracy,
        IssueKind::BadOsmWay,
        IssueKind::BadPlaceType,
        IssueKind::QuestionMarkTitles,
        IssueKind::NamesRomanizedOnly,
        IssueKind::MissingModernName,
        IssueKind::ReferencesWithoutZotero,
        IssueKind::ReferencesWithInvalidZotero,
        IssueKind::EmptyDescription,
        IssueKind::InadequateDescription,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::RoughNotUnlocated => "rough_not_unlocated",
            IssueKind::PoorAccuracy => "poor_accuracy",
            IssueKind::MissingAccuracy => "missing_accuracy",
            IssueKind::BadOsmWay => "bad_osm_way",
            IssueKind::BadPlaceType => "bad_place_type",
            IssueKind::QuestionMarkTitles => "question_mark_titles",
            IssueKind::NamesRomanizedOnly => "names_romanized_only",
            IssueKind::MissingModernName => "missing_modern_name",
            IssueKind::ReferencesWithoutZotero => "references_without_zotero",
            IssueKind::ReferencesWithInvalidZotero => "references_with_invalid_zotero",
            IssueKind::EmptyDescription => "empty_description",
            IssueKind::InadequateDescription => "inadequate_description",
        }
    }

    /// Kinds whose detail payload is the record's description.
    pub fn is_description(self) -> bool {
        matches!(
            self,
            IssueKind::EmptyDescription | IssueKind::InadequateDescription
        )
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown issue kind: {}", s))
    }
}

/// A name rendered for the report: `[attested, language, [romanized…]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSummary(pub String, pub String, pub Vec<String>);

/// Issue-specific data recorded alongside a finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    /// The record's full, sorted place-type set.
    PlaceTypes(Vec<String>),
    Accuracy(AccuracyBounds),
    OsmWayIds(Vec<String>),
    Names(Vec<NameSummary>),
    References(Vec<OwnedReference>),
    /// The raw, untrimmed description.
    Description(String),
}

/// Outcome of a rule that triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub detail: Option<Detail>,
}

impl Finding {
    pub fn flag() -> Self {
        Self { detail: None }
    }

    pub fn with_detail(detail: Detail) -> Self {
        Self {
            detail: Some(detail),
        }
    }
}

pub type Check = fn(&Place, &RuleConfig) -> Option<Finding>;

/// One entry of the rule catalog.
pub struct Rule {
    pub kind: IssueKind,
    /// Only evaluated for places whose features are all `precise`.
    pub precise_only: bool,
    pub check: Check,
}

/// Every rule, in catalog order.
pub const CATALOG: &[Rule] = &[
    Rule {
        kind: IssueKind::RoughNotUnlocated,
        precise_only: false,
        check: geometry::rough_not_unlocated,
    },
    Rule {
        kind: IssueKind::PoorAccuracy,
        precise_only: true,
        check: geometry::poor_accuracy,
    },
    Rule {
        kind: IssueKind::MissingAccuracy,
        precise_only: true,
        check: geometry::missing_accuracy,
    },
    Rule {
        kind: IssueKind::BadOsmWay,
        precise_only: true,
        check: geometry::bad_osm_way,
    },
    Rule {
        kind: IssueKind::BadPlaceType,
        precise_only: false,
        check: typology::bad_place_type,
    },
    Rule {
        kind: IssueKind::QuestionMarkTitles,
        precise_only: false,
        check: text::question_mark_title,
    },
    Rule {
        kind: IssueKind::NamesRomanizedOnly,
        precise_only: false,
        check: names::names_romanized_only,
    },
    Rule {
        kind: IssueKind::MissingModernName,
        precise_only: false,
        check: names::missing_modern_name,
    },
    Rule {
        kind: IssueKind::ReferencesWithoutZotero,
        precise_only: false,
        check: references::references_without_zotero,
    },
    Rule {
        kind: IssueKind::ReferencesWithInvalidZotero,
        precise_only: false,
        check: references::references_with_invalid_zotero,
    },
    Rule {
        kind: IssueKind::EmptyDescription,
        precise_only: false,
        check: text::empty_description,
    },
    Rule {
        kind: IssueKind::InadequateDescription,
        precise_only: false,
        check: text::inadequate_description,
    },
];
