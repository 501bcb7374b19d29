//! Guideline therapies carried out before the MTB case review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{DiagnosisId, PatientId, TherapyId};
use crate::time::OpenEndPeriod;

/// Ordinal of a therapy within the treatment sequence. The clinical domain
/// allows lines 0 through 9; out-of-range values must survive parsing so
/// validation can report them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TherapyLine(pub u8);

impl std::fmt::Display for TherapyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousGuidelineTherapy {
    pub id: TherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy_line: Option<TherapyLine>,
    /// ATC codings of the administered medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication: Option<Vec<Coding>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastGuidelineTherapy {
    pub id: TherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy_line: Option<TherapyLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<OpenEndPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_stopped: Option<Coding>,
}
