//! Per-record validators.
//!
//! Every validator has the same shape: destructure the record, run an
//! accumulating sequence of checks (patient back-reference first, then
//! field-level and cross-reference checks) and return the collected issues.
//! An empty result means the record is clean. Validators never mutate, never
//! log and never fail in any other way.

mod care_plan;
mod claim;
mod diagnosis;
mod guideline_therapy;
mod histology;
mod molecular_therapy;
mod ngs;
mod patient;
mod specimen;

pub use care_plan::{
    validate_care_plan, validate_counselling_request, validate_reevaluation_request,
    validate_rebiopsy_request, validate_recommendation, validate_study_inclusion_request,
};
pub use claim::{validate_claim, validate_claim_response};
pub use diagnosis::validate_diagnosis;
pub use guideline_therapy::{
    validate_last_guideline_therapy, validate_previous_guideline_therapy,
};
pub use histology::{validate_histology_report, validate_molecular_pathology_finding};
pub use molecular_therapy::{validate_molecular_therapy, validate_response};
pub use ngs::validate_ngs_report;
pub use patient::{validate_consent, validate_ecog_status, validate_episode, validate_patient};
pub use specimen::validate_specimen;

use mtb_model::{Location, PatientId, fatal};

use crate::checks::{Checked, equal};
use crate::context::ValidationContext;

/// Every record must point back at the file's patient; anything else is a
/// foreign record smuggled into the file.
pub(crate) fn patient_reference(
    patient: &PatientId,
    ctx: &ValidationContext<'_>,
    entity: &str,
    id: &str,
) -> Checked<()> {
    equal(patient, ctx.patient, || {
        fatal(format!("Invalid Reference to Patient '{patient}'"))
            .at(Location::new(entity, id, "patient"))
    })
}
