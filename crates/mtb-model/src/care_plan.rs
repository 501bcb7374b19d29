//! Care plans, therapy recommendations and follow-up requests issued by the
//! tumor board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{
    CarePlanId, DiagnosisId, GeneticCounsellingRequestId, HistologyReevaluationRequestId,
    PatientId, RebiopsyRequestId, SpecimenId, StudyInclusionRequestId, TherapyRecommendationId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub id: CarePlanId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TherapyRecommendationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_counselling_request: Option<GeneticCounsellingRequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequestId>>,
}

/// Priority of a therapy recommendation, 1 (highest) through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TherapyPriority {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyRecommendation {
    pub id: TherapyRecommendationId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    /// ATC codings of the recommended medication.
    pub medication: Vec<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TherapyPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_evidence: Option<Coding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticCounsellingRequest {
    pub id: GeneticCounsellingRequestId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebiopsyRequest {
    pub id: RebiopsyRequestId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReevaluationRequest {
    pub id: HistologyReevaluationRequestId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInclusionRequest {
    pub id: StudyInclusionRequestId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    /// ClinicalTrials.gov identifier, `NCT` followed by eight digits.
    pub nct_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}
