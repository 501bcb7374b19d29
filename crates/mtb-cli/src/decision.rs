//! Maps the severity profile of a data-quality report to the intake
//! decision: fatal issues reject the upload, info-only reports are accepted
//! as-is, anything in between is accepted with the report stored. A file is
//! only forwarded downstream when the report carries no errors.

use std::fmt;

use mtb_model::DataQualityReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeDecision {
    /// No issue worth storing; the file is forwarded.
    Accepted,
    /// File stored together with its report; forwarded unless `!forward`.
    AcceptedWithReport { forward: bool },
    /// Fatal issues; the upload is refused.
    Rejected,
}

impl IntakeDecision {
    pub fn from_report(report: &DataQualityReport) -> Self {
        if report.has_fatal() {
            return Self::Rejected;
        }
        if report.has_only_infos() {
            return Self::Accepted;
        }
        Self::AcceptedWithReport {
            forward: !report.has_errors(),
        }
    }
}

impl fmt::Display for IntakeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::AcceptedWithReport { forward: true } => f.write_str("accepted with report"),
            Self::AcceptedWithReport { forward: false } => {
                f.write_str("accepted with report, not forwarded")
            }
            Self::Rejected => f.write_str("rejected"),
        }
    }
}
