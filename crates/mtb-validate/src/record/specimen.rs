//! Specimen validation.

use mtb_model::{Issue, Location, Specimen, fatal, warning};

use crate::checks::{Collector, member, required};
use crate::coding::validate_icd10;
use crate::context::ValidationContext;
use crate::record::patient_reference;

/// A specimen must be justified by a diagnosis: its ICD-10-GM code has to
/// appear among the codes of the file's diagnoses.
pub fn validate_specimen(specimen: &Specimen, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("Specimen", specimen.id.as_str(), attribute);

    acc.check(patient_reference(
        &specimen.patient,
        ctx,
        "Specimen",
        specimen.id.as_str(),
    ));

    acc.extend(validate_icd10(&specimen.icd10, &ctx.catalogs));
    acc.check(member(&specimen.icd10.code, &ctx.icd10_codes, || {
        fatal(format!(
            "No Diagnosis with ICD-10 code '{}'",
            specimen.icd10.code
        ))
        .at(loc("icd10"))
    }));

    acc.check(required(specimen.specimen_type, || {
        warning("Missing Specimen Type").at(loc("type"))
    }));
    acc.check(required(specimen.collection, || {
        warning("Missing Specimen Collection").at(loc("collection"))
    }));

    acc.into_issues()
}
