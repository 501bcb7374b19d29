//! Diagnosis validation.

use mtb_model::{Diagnosis, Issue, Location, error, fatal, info};

use crate::checks::{Collector, member, required};
use crate::coding::{validate_icd10, validate_icd_o3_topography};
use crate::context::ValidationContext;
use crate::record::patient_reference;

/// The ICD-10-GM coding is required and checked against its catalog, the
/// ICD-O-3-T coding is optional but checked when present. Referenced
/// histology reports must exist in the file.
pub fn validate_diagnosis(diagnosis: &Diagnosis, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("Diagnosis", diagnosis.id.as_str(), attribute);

    acc.check(patient_reference(
        &diagnosis.patient,
        ctx,
        "Diagnosis",
        diagnosis.id.as_str(),
    ));

    if let Some(icd10) = acc.check(required(diagnosis.icd10.as_ref(), || {
        error("Missing ICD-10-GM Coding").at(loc("icd10"))
    })) {
        acc.extend(validate_icd10(icd10, &ctx.catalogs));
    }

    if let Some(topography) = acc.check(required(diagnosis.icd_o3_t.as_ref(), || {
        info("Missing ICD-O-3-T Coding").at(loc("icdO3T"))
    })) {
        acc.extend(validate_icd_o3_topography(topography, &ctx.catalogs));
    }

    for report in diagnosis.histology_reports.iter().flatten() {
        acc.check(member(report, &ctx.histology_reports, || {
            fatal(format!("Invalid Reference to HistologyReport '{report}'"))
                .at(loc("histologyReports"))
        }));
    }

    acc.into_issues()
}
