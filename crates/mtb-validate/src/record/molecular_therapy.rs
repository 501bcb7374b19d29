//! Molecular-therapy and response validation.

use mtb_model::{Issue, Location, MolecularTherapy, Response, fatal};

use crate::checks::{Collector, member};
use crate::coding::validate_medications;
use crate::context::ValidationContext;
use crate::record::patient_reference;

const ENTITY: &str = "MolecularTherapy";

/// Applies to every history entry of every documented therapy. All variants
/// carry the patient back-reference and the recommendation they are based
/// on; only started therapies carry medication to check.
pub fn validate_molecular_therapy(
    therapy: &MolecularTherapy,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let id = therapy.id().as_str();
    let loc = |attribute: &str| Location::new(ENTITY, id, attribute);

    acc.check(patient_reference(therapy.patient(), ctx, ENTITY, id));
    acc.check(member(therapy.based_on(), &ctx.recommendations, || {
        fatal(format!(
            "Invalid Reference to TherapyRecommendation '{}'",
            therapy.based_on()
        ))
        .at(loc("basedOn"))
    }));

    if let Some(medication) = therapy.medication() {
        acc.extend(validate_medications(medication, &ctx.catalogs));
    }

    acc.into_issues()
}

pub fn validate_response(response: &Response, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("Response", response.id.as_str(), attribute);

    acc.check(patient_reference(
        &response.patient,
        ctx,
        "Response",
        response.id.as_str(),
    ));
    acc.check(member(&response.therapy, &ctx.therapies, || {
        fatal(format!(
            "Invalid Reference to Therapy '{}'",
            response.therapy
        ))
        .at(loc("therapy"))
    }));

    acc.into_issues()
}
