//! Somatic NGS reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::histology::TumorCellContent;
use crate::ids::{NgsReportId, PatientId, SpecimenId};

/// Tumor mutational burden in mutations per megabase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tmb {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SomaticNgsReport {
    pub id: NgsReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub issued_on: NaiveDate,
    pub tumor_content: TumorCellContent,
    /// BRCAness score in `[0,1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brcaness: Option<f64>,
    /// Microsatellite-instability score in `[0,2]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msi: Option<f64>,
    pub tmb: Tmb,
}
