//! Care-plan, recommendation and follow-up-request validation.

use std::sync::LazyLock;

use mtb_model::{
    CarePlan, GeneticCounsellingRequest, HistologyReevaluationRequest, Issue, Location,
    RebiopsyRequest, StudyInclusionRequest, TherapyRecommendation, error, fatal, info, warning,
};
use regex::Regex;

use crate::checks::{Collector, matches, member, not_empty, required};
use crate::coding::validate_medications;
use crate::context::ValidationContext;
use crate::record::patient_reference;

/// ClinicalTrials.gov identifier: `NCT` followed by exactly eight digits.
static NCT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^NCT\d{8}$").expect("invalid NCT number regex"));

pub fn validate_care_plan(plan: &CarePlan, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("CarePlan", plan.id.as_str(), attribute);

    acc.check(patient_reference(&plan.patient, ctx, "CarePlan", plan.id.as_str()));
    acc.check(member(&plan.diagnosis, &ctx.diagnoses, || {
        fatal(format!("Invalid Reference to Diagnosis '{}'", plan.diagnosis)).at(loc("diagnosis"))
    }));
    acc.check(required(plan.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    if let Some(recommendations) = acc.check(required(plan.recommendations.as_deref(), || {
        error("Missing Therapy Recommendations").at(loc("recommendations"))
    })) {
        acc.check(not_empty(recommendations, || {
            error("Missing Therapy Recommendations").at(loc("recommendations"))
        }));
        for recommendation in recommendations {
            acc.check(member(recommendation, &ctx.recommendations, || {
                fatal(format!(
                    "Invalid Reference to TherapyRecommendation '{recommendation}'"
                ))
                .at(loc("recommendations"))
            }));
        }
    }

    if let Some(request) = &plan.genetic_counselling_request {
        acc.check(member(request, &ctx.counselling_requests, || {
            fatal(format!(
                "Invalid Reference to GeneticCounsellingRequest '{request}'"
            ))
            .at(loc("geneticCounsellingRequest"))
        }));
    }

    for request in plan.rebiopsy_requests.iter().flatten() {
        acc.check(member(request, &ctx.rebiopsy_requests, || {
            fatal(format!("Invalid Reference to RebiopsyRequest '{request}'"))
                .at(loc("rebiopsyRequests"))
        }));
    }

    acc.into_issues()
}

pub fn validate_recommendation(
    recommendation: &TherapyRecommendation,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| {
        Location::new("TherapyRecommendation", recommendation.id.as_str(), attribute)
    };

    acc.check(patient_reference(
        &recommendation.patient,
        ctx,
        "TherapyRecommendation",
        recommendation.id.as_str(),
    ));
    acc.check(required(recommendation.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.check(not_empty(&recommendation.medication, || {
        warning("Missing Medication").at(loc("medication"))
    }));
    acc.extend(validate_medications(&recommendation.medication, &ctx.catalogs));

    acc.check(required(recommendation.priority, || {
        warning("Missing Priority").at(loc("priority"))
    }));
    acc.check(required(recommendation.level_of_evidence.as_ref(), || {
        info("Missing Level of Evidence").at(loc("levelOfEvidence"))
    }));

    acc.into_issues()
}

pub fn validate_counselling_request(
    request: &GeneticCounsellingRequest,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| {
        Location::new("GeneticCounsellingRequest", request.id.as_str(), attribute)
    };

    acc.check(patient_reference(
        &request.patient,
        ctx,
        "GeneticCounsellingRequest",
        request.id.as_str(),
    ));
    acc.check(required(request.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.into_issues()
}

pub fn validate_rebiopsy_request(
    request: &RebiopsyRequest,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("RebiopsyRequest", request.id.as_str(), attribute);

    acc.check(patient_reference(
        &request.patient,
        ctx,
        "RebiopsyRequest",
        request.id.as_str(),
    ));
    acc.check(member(&request.specimen, &ctx.specimens, || {
        fatal(format!(
            "Invalid Reference to Specimen '{}'",
            request.specimen
        ))
        .at(loc("specimen"))
    }));
    acc.check(required(request.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.into_issues()
}

pub fn validate_reevaluation_request(
    request: &HistologyReevaluationRequest,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| {
        Location::new("HistologyReevaluationRequest", request.id.as_str(), attribute)
    };

    acc.check(patient_reference(
        &request.patient,
        ctx,
        "HistologyReevaluationRequest",
        request.id.as_str(),
    ));
    acc.check(member(&request.specimen, &ctx.specimens, || {
        fatal(format!(
            "Invalid Reference to Specimen '{}'",
            request.specimen
        ))
        .at(loc("specimen"))
    }));
    acc.check(required(request.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.into_issues()
}

pub fn validate_study_inclusion_request(
    request: &StudyInclusionRequest,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| {
        Location::new("StudyInclusionRequest", request.id.as_str(), attribute)
    };

    acc.check(patient_reference(
        &request.patient,
        ctx,
        "StudyInclusionRequest",
        request.id.as_str(),
    ));
    acc.check(member(&request.diagnosis, &ctx.diagnoses, || {
        fatal(format!(
            "Invalid Reference to Diagnosis '{}'",
            request.diagnosis
        ))
        .at(loc("diagnosis"))
    }));
    acc.check(matches(&request.nct_number, &NCT_NUMBER, || {
        error(format!("Invalid NCT number '{}'", request.nct_number)).at(loc("nctNumber"))
    }));
    acc.check(required(request.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.into_issues()
}
