//! Tumor diagnoses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{DiagnosisId, HistologyReportId, PatientId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: DiagnosisId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<NaiveDate>,
    /// ICD-10-GM coding of the diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icd10: Option<Coding>,
    /// ICD-O-3 topography coding of the tumor localization.
    #[serde(rename = "icdO3T", skip_serializing_if = "Option::is_none")]
    pub icd_o3_t: Option<Coding>,
    /// Histology reports backing this diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_reports: Option<Vec<HistologyReportId>>,
}
