//! Claim and claim-response validation.

use mtb_model::{Claim, ClaimResponse, Issue, Location, fatal, warning};

use crate::checks::{Collector, member, required};
use crate::context::ValidationContext;
use crate::record::patient_reference;

pub fn validate_claim(claim: &Claim, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("Claim", claim.id.as_str(), attribute);

    acc.check(patient_reference(&claim.patient, ctx, "Claim", claim.id.as_str()));
    acc.check(member(&claim.therapy, &ctx.recommendations, || {
        fatal(format!(
            "Invalid Reference to TherapyRecommendation '{}'",
            claim.therapy
        ))
        .at(loc("therapy"))
    }));

    acc.into_issues()
}

pub fn validate_claim_response(
    response: &ClaimResponse,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("ClaimResponse", response.id.as_str(), attribute);

    acc.check(patient_reference(
        &response.patient,
        ctx,
        "ClaimResponse",
        response.id.as_str(),
    ));
    acc.check(member(&response.claim, &ctx.claims, || {
        fatal(format!("Invalid Reference to Claim '{}'", response.claim)).at(loc("claim"))
    }));
    acc.check(required(response.reason.as_ref(), || {
        warning("Missing Reason").at(loc("reason"))
    }));

    acc.into_issues()
}
