//! Data-quality issue and report types.
//!
//! Validation never throws: every violated rule becomes an [`Issue`] tagged
//! with a [`Severity`] and a [`Location`] into the submitted file, and all
//! issues of one validation run are collected into a [`DataQualityReport`].
//!
//! Severity drives the intake decision downstream:
//! - any `Fatal` issue - the upload is rejected
//! - only `Info` issues - the file is accepted as-is
//! - anything else - the file is accepted and the report stored; the file
//!   is only forwarded when no `Error` is present

use serde::{Deserialize, Serialize};

use crate::ids::PatientId;

/// Severity of a data-quality issue, ordered `Info < Warning < Error < Fatal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }
}

/// Points into the submitted document: which record kind, which record, and
/// which attribute. `id` is empty for coding-level issues that are not bound
/// to a record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub entity_type: String,
    pub id: String,
    pub attribute: String,
}

impl Location {
    pub fn new(
        entity_type: impl Into<String>,
        id: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            attribute: attribute.into(),
        }
    }
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
}

/// Start building an `Info` issue.
pub fn info(message: impl Into<String>) -> IssueBuilder {
    IssueBuilder::new(Severity::Info, message)
}

/// Start building a `Warning` issue.
pub fn warning(message: impl Into<String>) -> IssueBuilder {
    IssueBuilder::new(Severity::Warning, message)
}

/// Start building an `Error` issue.
pub fn error(message: impl Into<String>) -> IssueBuilder {
    IssueBuilder::new(Severity::Error, message)
}

/// Start building a `Fatal` issue.
pub fn fatal(message: impl Into<String>) -> IssueBuilder {
    IssueBuilder::new(Severity::Fatal, message)
}

/// Severity and message of an issue, finalized by attaching its location.
#[derive(Debug, Clone)]
pub struct IssueBuilder {
    severity: Severity,
    message: String,
}

impl IssueBuilder {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn at(self, location: Location) -> Issue {
        Issue {
            severity: self.severity,
            message: self.message,
            location,
        }
    }
}

/// All issues found in one MTB file. Only ever built from a non-empty issue
/// list; a clean file is returned as-is instead of producing a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityReport {
    pub patient_id: PatientId,
    pub issues: Vec<Issue>,
}

impl DataQualityReport {
    /// Returns `None` for an empty issue list: a report without issues is a
    /// programmer error, not a value.
    pub fn new(patient_id: PatientId, issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            return None;
        }
        Some(Self { patient_id, issues })
    }

    pub fn has_fatal(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Fatal)
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity >= Severity::Error)
    }

    pub fn has_only_infos(&self) -> bool {
        self.issues
            .iter()
            .all(|issue| issue.severity == Severity::Info)
    }

    pub fn count_of(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
