//! Guideline-therapy validation.

use mtb_model::{
    Issue, LastGuidelineTherapy, Location, PreviousGuidelineTherapy, TherapyLine, error, fatal,
    warning,
};

use crate::checks::{Collector, in_range, member, required};
use crate::coding::validate_medications;
use crate::context::ValidationContext;
use crate::record::patient_reference;

const ENTITY_PREVIOUS: &str = "PreviousGuidelineTherapy";
const ENTITY_LAST: &str = "LastGuidelineTherapy";

pub fn validate_previous_guideline_therapy(
    therapy: &PreviousGuidelineTherapy,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new(ENTITY_PREVIOUS, therapy.id.as_str(), attribute);

    acc.check(patient_reference(
        &therapy.patient,
        ctx,
        ENTITY_PREVIOUS,
        therapy.id.as_str(),
    ));
    acc.check(member(&therapy.diagnosis, &ctx.diagnoses, || {
        fatal(format!(
            "Invalid Reference to Diagnosis '{}'",
            therapy.diagnosis
        ))
        .at(loc("diagnosis"))
    }));

    check_therapy_line(&mut acc, therapy.therapy_line, &loc);

    if let Some(medication) = &therapy.medication {
        acc.extend(validate_medications(medication, &ctx.catalogs));
    }

    acc.into_issues()
}

pub fn validate_last_guideline_therapy(
    therapy: &LastGuidelineTherapy,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new(ENTITY_LAST, therapy.id.as_str(), attribute);

    acc.check(patient_reference(
        &therapy.patient,
        ctx,
        ENTITY_LAST,
        therapy.id.as_str(),
    ));
    acc.check(member(&therapy.diagnosis, &ctx.diagnoses, || {
        fatal(format!(
            "Invalid Reference to Diagnosis '{}'",
            therapy.diagnosis
        ))
        .at(loc("diagnosis"))
    }));

    check_therapy_line(&mut acc, therapy.therapy_line, &loc);

    if let Some(medication) = &therapy.medication {
        acc.extend(validate_medications(medication, &ctx.catalogs));
    }

    acc.check(required(therapy.reason_stopped.as_ref(), || {
        warning("Missing Reason Stopped").at(loc("reasonStopped"))
    }));

    // No response record refers to this therapy.
    acc.check(member(&therapy.id, &ctx.responded_therapies, || {
        warning("Missing Response").at(loc("response"))
    }));

    acc.into_issues()
}

fn check_therapy_line(
    acc: &mut Collector,
    line: Option<TherapyLine>,
    loc: &impl Fn(&str) -> Location,
) {
    match line {
        None => {
            acc.push(warning("Missing Therapy Line").at(loc("therapyLine")));
        }
        Some(line) => {
            acc.check(in_range(line.0, 0..=9, || {
                error(format!("Therapy Line {line} not in allowed range [0,9]"))
                    .at(loc("therapyLine"))
            }));
        }
    }
}
