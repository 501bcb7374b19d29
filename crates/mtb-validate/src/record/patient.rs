//! Patient, consent, episode and ECOG status validation.

use mtb_model::{Consent, EcogStatus, Issue, Location, MtbEpisode, Patient, error, info, warning};

use crate::checks::{Collector, after, before, required};
use crate::context::ValidationContext;
use crate::record::patient_reference;

/// `birthDate` is required, `insurance` recommended, `dateOfDeath` optional.
/// A death date must lie in the past and after the birth date.
pub fn validate_patient(patient: &Patient, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("Patient", patient.id.as_str(), attribute);

    let birth_date = acc.check(required(patient.birth_date, || {
        error("Missing BirthDate").at(loc("birthdate"))
    }));

    acc.check(required(patient.insurance.as_deref(), || {
        warning("Missing Health Insurance").at(loc("insurance"))
    }));

    let date_of_death = acc.check(required(patient.date_of_death, || {
        info("Missing Date of Death").at(loc("dateOfDeath"))
    }));
    if let Some(death) = date_of_death {
        acc.check(before(death, ctx.today, || {
            error(format!("Date of Death '{death}' must be in the past")).at(loc("dateOfDeath"))
        }));
        if let Some(birth) = birth_date {
            acc.check(after(death, birth, || {
                error(format!(
                    "Date of Death '{death}' must be after BirthDate '{birth}'"
                ))
                .at(loc("dateOfDeath"))
            }));
        }
    }

    acc.into_issues()
}

pub fn validate_consent(consent: &Consent, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    acc.check(patient_reference(
        &consent.patient,
        ctx,
        "Consent",
        consent.id.as_str(),
    ));
    acc.into_issues()
}

pub fn validate_episode(episode: &MtbEpisode, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    acc.check(patient_reference(
        &episode.patient,
        ctx,
        "MTBEpisode",
        episode.id.as_str(),
    ));
    acc.into_issues()
}

pub fn validate_ecog_status(status: &EcogStatus, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    acc.check(patient_reference(
        &status.patient,
        ctx,
        "ECOGStatus",
        status.id.as_str(),
    ));
    acc.into_issues()
}
