//! Cost claims for recommended therapies and their responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::Coding;
use crate::ids::{ClaimId, ClaimResponseId, PatientId, TherapyRecommendationId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    pub patient: PatientId,
    /// The therapy recommendation this claim asks cost coverage for.
    pub therapy: TherapyRecommendationId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimResponseId,
    pub patient: PatientId,
    pub claim: ClaimId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Coding>,
}
