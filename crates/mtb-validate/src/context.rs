//! Cross-reference indexes shared by the record validators.
//!
//! The orchestrator builds one [`ValidationContext`] per `check` call before
//! recursing into the records. Every referential-integrity rule looks up its
//! target in these indexes; a miss means the submitted file references a
//! record it does not contain.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use mtb_catalogs::{Icd10Lookup, IcdO3Lookup, MedicationLookup};
use mtb_model::{
    CarePlanId, ClaimId, DiagnosisId, GeneticCounsellingRequestId, HistologyReportId, MtbFile,
    PatientId, RebiopsyRequestId, SpecimenId, TherapyId, TherapyRecommendationId,
};

/// The read-only catalog handles a validation run works against.
#[derive(Clone, Copy)]
pub struct Catalogs<'a> {
    pub icd10: &'a dyn Icd10Lookup,
    pub icd_o3: &'a dyn IcdO3Lookup,
    pub medications: &'a dyn MedicationLookup,
}

pub struct ValidationContext<'a> {
    pub patient: &'a PatientId,
    pub today: NaiveDate,
    pub catalogs: Catalogs<'a>,
    pub diagnoses: BTreeSet<DiagnosisId>,
    /// ICD-10-GM codes of the file's diagnoses; specimens must match one.
    pub icd10_codes: BTreeSet<String>,
    pub specimens: BTreeSet<SpecimenId>,
    pub histology_reports: BTreeSet<HistologyReportId>,
    pub care_plans: BTreeSet<CarePlanId>,
    pub recommendations: BTreeSet<TherapyRecommendationId>,
    pub counselling_requests: BTreeSet<GeneticCounsellingRequestId>,
    pub rebiopsy_requests: BTreeSet<RebiopsyRequestId>,
    pub claims: BTreeSet<ClaimId>,
    /// Ids of every therapy in the file: previous guideline therapies, the
    /// last guideline therapy and all molecular-therapy history entries.
    pub therapies: BTreeSet<TherapyId>,
    /// Therapies some [`Response`](mtb_model::Response) refers to; a last
    /// guideline therapy without an entry here has no documented response.
    pub responded_therapies: BTreeSet<TherapyId>,
}

impl<'a> ValidationContext<'a> {
    pub fn build(file: &'a MtbFile, catalogs: Catalogs<'a>, today: NaiveDate) -> Self {
        let mut diagnoses = BTreeSet::new();
        let mut icd10_codes = BTreeSet::new();
        for diagnosis in file.diagnoses.iter().flatten() {
            diagnoses.insert(diagnosis.id.clone());
            if let Some(icd10) = &diagnosis.icd10 {
                icd10_codes.insert(icd10.code.clone());
            }
        }

        let specimens = file
            .specimens
            .iter()
            .flatten()
            .map(|specimen| specimen.id.clone())
            .collect();
        let histology_reports = file
            .histology_reports
            .iter()
            .flatten()
            .map(|report| report.id.clone())
            .collect();
        let care_plans = file
            .care_plans
            .iter()
            .flatten()
            .map(|plan| plan.id.clone())
            .collect();
        let recommendations = file
            .recommendations
            .iter()
            .flatten()
            .map(|recommendation| recommendation.id.clone())
            .collect();
        let counselling_requests = file
            .genetic_counselling_requests
            .iter()
            .flatten()
            .map(|request| request.id.clone())
            .collect();
        let rebiopsy_requests = file
            .rebiopsy_requests
            .iter()
            .flatten()
            .map(|request| request.id.clone())
            .collect();
        let claims = file
            .claims
            .iter()
            .flatten()
            .map(|claim| claim.id.clone())
            .collect();

        let mut therapies: BTreeSet<TherapyId> = file
            .previous_guideline_therapies
            .iter()
            .flatten()
            .map(|therapy| therapy.id.clone())
            .collect();
        if let Some(last) = &file.last_guideline_therapy {
            therapies.insert(last.id.clone());
        }
        for documentation in file.molecular_therapies.iter().flatten() {
            for state in &documentation.history {
                therapies.insert(state.id().clone());
            }
        }

        let responded_therapies = file
            .responses
            .iter()
            .flatten()
            .map(|response| response.therapy.clone())
            .collect();

        Self {
            patient: &file.patient.id,
            today,
            catalogs,
            diagnoses,
            icd10_codes,
            specimens,
            histology_reports,
            care_plans,
            recommendations,
            counselling_requests,
            rebiopsy_requests,
            claims,
            therapies,
            responded_therapies,
        }
    }
}
