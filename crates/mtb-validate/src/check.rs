//! The MTB-file orchestrator.
//!
//! [`Validator::check`] validates one complete case file: it builds the
//! cross-reference indexes, branches on the consent status and folds the
//! accumulated product of every record validation. A clean file is returned
//! unchanged; otherwise the caller receives a [`DataQualityReport`] carrying
//! every issue found in this single pass.

use chrono::{Local, NaiveDate};
use mtb_model::{
    ConsentStatus, DataQualityReport, Issue, Location, MtbFile, error, fatal, warning,
};

use crate::checks::{Collector, forbidden, not_empty};
use crate::context::{Catalogs, ValidationContext};
use crate::record::{
    validate_care_plan, validate_claim, validate_claim_response, validate_consent,
    validate_counselling_request, validate_diagnosis, validate_ecog_status, validate_episode,
    validate_histology_report, validate_last_guideline_therapy, validate_molecular_pathology_finding,
    validate_molecular_therapy, validate_ngs_report, validate_patient,
    validate_previous_guideline_therapy, validate_rebiopsy_request, validate_recommendation,
    validate_reevaluation_request, validate_response, validate_specimen,
    validate_study_inclusion_request,
};

/// Validates MTB case files against a set of clinical code catalogs.
///
/// The validator is pure: `check` is a function of the file, the catalogs
/// and `today`, performs no I/O and never mutates shared state, so one
/// validator may be used from any number of threads.
pub struct Validator<'a> {
    catalogs: Catalogs<'a>,
    today: NaiveDate,
}

impl<'a> Validator<'a> {
    pub fn new(catalogs: Catalogs<'a>) -> Self {
        Self {
            catalogs,
            today: Local::now().date_naive(),
        }
    }

    /// Pin the reference date used for "must lie in the past" checks.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validate one case file, returning it unchanged when no rule is
    /// violated and the full data-quality report otherwise.
    pub fn check(&self, file: MtbFile) -> Result<MtbFile, DataQualityReport> {
        let ctx = ValidationContext::build(&file, self.catalogs, self.today);
        let issues = match file.consent.status {
            ConsentStatus::Rejected => check_rejected(&file, &ctx),
            ConsentStatus::Active => check_active(&file, &ctx),
        };
        match DataQualityReport::new(file.patient.id.clone(), issues) {
            None => Ok(file),
            Some(report) => Err(report),
        }
    }
}

fn slot_location(patient: &str, slot: &str) -> Location {
    Location::new("MTBFile", patient, slot)
}

/// With consent `rejected`, patient, consent and episode validate as usual
/// and every clinical slot must be absent.
fn check_rejected(file: &MtbFile, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    acc.extend(validate_patient(&file.patient, ctx));
    acc.extend(validate_consent(&file.consent, ctx));
    acc.extend(validate_episode(&file.episode, ctx));

    let patient = file.patient.id.as_str();
    let locked = |slot: &str| {
        fatal("Data must not be defined for Consent 'Rejected'").at(slot_location(patient, slot))
    };

    acc.check(forbidden(&file.diagnoses, || locked("diagnoses")));
    acc.check(forbidden(&file.previous_guideline_therapies, || {
        locked("previousGuidelineTherapies")
    }));
    acc.check(forbidden(&file.last_guideline_therapy, || {
        locked("lastGuidelineTherapy")
    }));
    acc.check(forbidden(&file.ecog_status, || locked("ecogStatus")));
    acc.check(forbidden(&file.specimens, || locked("specimens")));
    acc.check(forbidden(&file.histology_reports, || {
        locked("histologyReports")
    }));
    acc.check(forbidden(&file.molecular_pathology_findings, || {
        locked("molecularPathologyFindings")
    }));
    acc.check(forbidden(&file.ngs_reports, || locked("ngsReports")));
    acc.check(forbidden(&file.care_plans, || locked("carePlans")));
    acc.check(forbidden(&file.recommendations, || locked("recommendations")));
    acc.check(forbidden(&file.genetic_counselling_requests, || {
        locked("geneticCounsellingRequests")
    }));
    acc.check(forbidden(&file.rebiopsy_requests, || {
        locked("rebiopsyRequests")
    }));
    acc.check(forbidden(&file.histology_reevaluation_requests, || {
        locked("histologyReevaluationRequests")
    }));
    acc.check(forbidden(&file.study_inclusion_requests, || {
        locked("studyInclusionRequests")
    }));
    acc.check(forbidden(&file.claims, || locked("claims")));
    acc.check(forbidden(&file.claim_responses, || locked("claimResponses")));
    acc.check(forbidden(&file.molecular_therapies, || {
        locked("molecularTherapies")
    }));
    acc.check(forbidden(&file.responses, || locked("responses")));

    acc.into_issues()
}

fn check_active(file: &MtbFile, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let patient = file.patient.id.as_str();

    acc.extend(validate_patient(&file.patient, ctx));
    acc.extend(validate_consent(&file.consent, ctx));
    acc.extend(validate_episode(&file.episode, ctx));

    required_each(
        &mut acc,
        file.diagnoses.as_deref(),
        || error("Missing Diagnoses").at(slot_location(patient, "diagnoses")),
        |diagnosis| validate_diagnosis(diagnosis, ctx),
    );
    required_each(
        &mut acc,
        file.previous_guideline_therapies.as_deref(),
        || {
            warning("Missing Previous Guideline Therapies")
                .at(slot_location(patient, "previousGuidelineTherapies"))
        },
        |therapy| validate_previous_guideline_therapy(therapy, ctx),
    );

    match &file.last_guideline_therapy {
        None => acc.push(
            error("Missing Last Guideline Therapy")
                .at(slot_location(patient, "lastGuidelineTherapy")),
        ),
        Some(therapy) => acc.extend(validate_last_guideline_therapy(therapy, ctx)),
    }

    required_each(
        &mut acc,
        file.ecog_status.as_deref(),
        || warning("Missing ECOG Status").at(slot_location(patient, "ecogStatus")),
        |status| validate_ecog_status(status, ctx),
    );
    required_each(
        &mut acc,
        file.specimens.as_deref(),
        || warning("Missing Specimens").at(slot_location(patient, "specimens")),
        |specimen| validate_specimen(specimen, ctx),
    );
    required_each(
        &mut acc,
        file.histology_reports.as_deref(),
        || warning("Missing Histology Reports").at(slot_location(patient, "histologyReports")),
        |report| validate_histology_report(report, ctx),
    );
    required_each(
        &mut acc,
        file.molecular_pathology_findings.as_deref(),
        || {
            warning("Missing Molecular Pathology Findings")
                .at(slot_location(patient, "molecularPathologyFindings"))
        },
        |finding| validate_molecular_pathology_finding(finding, ctx),
    );
    required_each(
        &mut acc,
        file.ngs_reports.as_deref(),
        || warning("Missing NGS Reports").at(slot_location(patient, "ngsReports")),
        |report| validate_ngs_report(report, ctx),
    );
    required_each(
        &mut acc,
        file.care_plans.as_deref(),
        || warning("Missing Care Plans").at(slot_location(patient, "carePlans")),
        |plan| validate_care_plan(plan, ctx),
    );
    required_each(
        &mut acc,
        file.recommendations.as_deref(),
        || {
            warning("Missing Therapy Recommendations")
                .at(slot_location(patient, "recommendations"))
        },
        |recommendation| validate_recommendation(recommendation, ctx),
    );

    optional_each(&mut acc, file.genetic_counselling_requests.as_deref(), |request| {
        validate_counselling_request(request, ctx)
    });
    optional_each(&mut acc, file.rebiopsy_requests.as_deref(), |request| {
        validate_rebiopsy_request(request, ctx)
    });
    optional_each(
        &mut acc,
        file.histology_reevaluation_requests.as_deref(),
        |request| validate_reevaluation_request(request, ctx),
    );
    optional_each(&mut acc, file.study_inclusion_requests.as_deref(), |request| {
        validate_study_inclusion_request(request, ctx)
    });

    required_each(
        &mut acc,
        file.claims.as_deref(),
        || warning("Missing Claims").at(slot_location(patient, "claims")),
        |claim| validate_claim(claim, ctx),
    );
    required_each(
        &mut acc,
        file.claim_responses.as_deref(),
        || warning("Missing Claim Responses").at(slot_location(patient, "claimResponses")),
        |response| validate_claim_response(response, ctx),
    );

    if let Some(therapies) = file.molecular_therapies.as_deref() {
        acc.check(not_empty(therapies, || {
            warning("Missing Molecular Therapies")
                .at(slot_location(patient, "molecularTherapies"))
        }));
        for documentation in therapies {
            for state in &documentation.history {
                acc.extend(validate_molecular_therapy(state, ctx));
            }
        }
    }

    required_each(
        &mut acc,
        file.responses.as_deref(),
        || warning("Missing Responses").at(slot_location(patient, "responses")),
        |response| validate_response(response, ctx),
    );

    acc.into_issues()
}

/// Missing and empty slots both produce the supplied issue; the elements of
/// a populated slot are validated one by one.
fn required_each<T>(
    acc: &mut Collector,
    slot: Option<&[T]>,
    on_missing: impl FnOnce() -> Issue,
    validate: impl Fn(&T) -> Vec<Issue>,
) {
    match slot {
        None => acc.push(on_missing()),
        Some(items) => {
            acc.check(not_empty(items, on_missing));
            for item in items {
                acc.extend(validate(item));
            }
        }
    }
}

/// Absence produces no issue; present elements are validated one by one.
fn optional_each<T>(acc: &mut Collector, slot: Option<&[T]>, validate: impl Fn(&T) -> Vec<Issue>) {
    for item in slot.into_iter().flatten() {
        acc.extend(validate(item));
    }
}
