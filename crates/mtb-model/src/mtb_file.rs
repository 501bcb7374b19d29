//! The MTB case-file aggregate.

use serde::{Deserialize, Serialize};

use crate::care_plan::{
    CarePlan, GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest,
    StudyInclusionRequest, TherapyRecommendation,
};
use crate::claim::{Claim, ClaimResponse};
use crate::diagnosis::Diagnosis;
use crate::histology::{HistologyReport, MolecularPathologyFinding};
use crate::molecular_therapy::{MolecularTherapyHistory, Response};
use crate::ngs::SomaticNgsReport;
use crate::patient::{Consent, EcogStatus, MtbEpisode, Patient};
use crate::specimen::Specimen;
use crate::therapy::{LastGuidelineTherapy, PreviousGuidelineTherapy};

/// One complete MTB case file as submitted to the intake service.
///
/// Patient, consent and episode are always present; every clinical slot is
/// optional. With consent status `rejected` the clinical slots must all be
/// absent, which is enforced by validation rather than by the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbFile {
    pub patient: Patient,
    pub consent: Consent,
    pub episode: MtbEpisode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<Diagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_guideline_therapies: Option<Vec<PreviousGuidelineTherapy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_guideline_therapy: Option<LastGuidelineTherapy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecog_status: Option<Vec<EcogStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimens: Option<Vec<Specimen>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_reports: Option<Vec<HistologyReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_pathology_findings: Option<Vec<MolecularPathologyFinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngs_reports: Option<Vec<SomaticNgsReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_plans: Option<Vec<CarePlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TherapyRecommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_counselling_requests: Option<Vec<GeneticCounsellingRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_reevaluation_requests: Option<Vec<HistologyReevaluationRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_inclusion_requests: Option<Vec<StudyInclusionRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<Claim>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_responses: Option<Vec<ClaimResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_therapies: Option<Vec<MolecularTherapyHistory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<Response>>,
}
