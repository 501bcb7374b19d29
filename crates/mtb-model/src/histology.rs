//! Histology reports, tumor cell content and molecular-pathology findings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{HistologyReportId, MolecularPathologyFindingId, PatientId, SpecimenId};

/// How a tumor cell content value was determined. Histology reports carry
/// histologic estimates, NGS reports carry bioinformatically computed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TumorCellContentMethod {
    Histologic,
    Bioinformatic,
}

impl TumorCellContentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Histologic => "histologic",
            Self::Bioinformatic => "bioinformatic",
        }
    }
}

/// Fraction of tumor cells in a specimen, in `[0,1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorCellContent {
    pub specimen: SpecimenId,
    pub method: TumorCellContentMethod,
    pub value: f64,
}

/// ICD-O-3 morphology finding of a histology report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorMorphology {
    pub value: Coding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReport {
    pub id: HistologyReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morphology: Option<TumorMorphology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_content: Option<TumorCellContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularPathologyFinding {
    pub id: MolecularPathologyFindingId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
