//! Tumor specimens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{PatientId, SpecimenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecimenType {
    FreshTissue,
    CryoFrozen,
    #[serde(rename = "FFPE")]
    Ffpe,
    LiquidBiopsy,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionLocalization {
    Primary,
    Metastasis,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionMethod {
    Biopsy,
    Resection,
    LiquidBiopsy,
    Cytology,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenCollection {
    pub date: NaiveDate,
    pub localization: CollectionLocalization,
    pub method: CollectionMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: SpecimenId,
    pub patient: PatientId,
    /// ICD-10-GM coding of the diagnosis this specimen belongs to.
    pub icd10: Coding,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub specimen_type: Option<SpecimenType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<SpecimenCollection>,
}
