//! # Placecheck - gazetteer data quality audits
//!
//! Placecheck reads a corpus of place records (JSON documents with names,
//! locations, place types and bibliographic references), checks each one
//! against a fixed catalog of quality rules, and writes one consolidated
//! report of every problem it found.
//!
//! ## Overview
//!
//! A run discovers record files below a source directory, evaluates each
//! record independently, and folds the findings into an aggregator. Once the
//! corpus is exhausted the aggregator produces a [`report::Report`], which is
//! written as `issues.json` and can later be split into per-issue CSV files.
//! Source records are never modified.
//!
//! ## Modules
//!
//! - [`place`] - Record loading and typed accessors
//! - [`rules`] - The issue catalog and one check per issue kind
//! - [`evaluate`] - Apply the whole catalog to one record
//! - [`aggregate`] - Corpus-wide issue state and its consistency checks
//! - [`report`] - The report document and its JSON form
//! - [`corpus`] - Record discovery and the audit loop
//! - [`export`] - Per-issue CSV extracts
//! - [`formatters`] - Plain-text run summary
//! - [`config`] - Rule parameters and their defaults
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use placecheck::config::AuditConfig;
//! use placecheck::corpus::audit_corpus;
//!
//! let config = AuditConfig::default();
//! let report = audit_corpus(Path::new("data/places"), &config)
//!     .expect("audit failed");
//! report.write_to_dir(Path::new("out")).expect("write failed");
//! println!("{} problem places", report.summary.problem_count);
//! ```

pub mod aggregate;
pub mod config;
pub mod corpus;
pub mod evaluate;
pub mod export;
pub mod formatters;
pub mod place;
pub mod report;
pub mod rules;
