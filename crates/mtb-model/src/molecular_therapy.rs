//! Molecular therapies carried out on MTB recommendations, their
//! documentation history and therapy responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{PatientId, ResponseId, TherapyId, TherapyRecommendationId};
use crate::time::{ClosedPeriod, OpenEndPeriod};

/// Documentation trail of one molecular therapy. Every follow-up appends a
/// new state to `history`; the latest entry is the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularTherapyHistory {
    pub history: Vec<MolecularTherapy>,
}

/// State of a molecular therapy. Only started therapies (stopped, completed,
/// ongoing) carry medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum MolecularTherapy {
    NotDone {
        id: TherapyId,
        patient: PatientId,
        based_on: TherapyRecommendationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        recorded_on: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<Coding>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Stopped {
        id: TherapyId,
        patient: PatientId,
        based_on: TherapyRecommendationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        recorded_on: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<ClosedPeriod>,
        #[serde(skip_serializing_if = "Option::is_none")]
        medication: Option<Vec<Coding>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<Coding>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Completed {
        id: TherapyId,
        patient: PatientId,
        based_on: TherapyRecommendationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        recorded_on: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<ClosedPeriod>,
        #[serde(skip_serializing_if = "Option::is_none")]
        medication: Option<Vec<Coding>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Ongoing {
        id: TherapyId,
        patient: PatientId,
        based_on: TherapyRecommendationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        recorded_on: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<OpenEndPeriod>,
        #[serde(skip_serializing_if = "Option::is_none")]
        medication: Option<Vec<Coding>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl MolecularTherapy {
    pub fn id(&self) -> &TherapyId {
        match self {
            Self::NotDone { id, .. }
            | Self::Stopped { id, .. }
            | Self::Completed { id, .. }
            | Self::Ongoing { id, .. } => id,
        }
    }

    pub fn patient(&self) -> &PatientId {
        match self {
            Self::NotDone { patient, .. }
            | Self::Stopped { patient, .. }
            | Self::Completed { patient, .. }
            | Self::Ongoing { patient, .. } => patient,
        }
    }

    pub fn based_on(&self) -> &TherapyRecommendationId {
        match self {
            Self::NotDone { based_on, .. }
            | Self::Stopped { based_on, .. }
            | Self::Completed { based_on, .. }
            | Self::Ongoing { based_on, .. } => based_on,
        }
    }

    /// Medication of started therapies; `NotDone` carries none.
    pub fn medication(&self) -> Option<&[Coding]> {
        match self {
            Self::NotDone { .. } => None,
            Self::Stopped { medication, .. }
            | Self::Completed { medication, .. }
            | Self::Ongoing { medication, .. } => medication.as_deref(),
        }
    }
}

/// Response assessment of a therapy (guideline or molecular).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub patient: PatientId,
    pub therapy: TherapyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// RECIST coding of the assessed response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Coding>,
}
