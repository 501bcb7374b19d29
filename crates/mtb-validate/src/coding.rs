//! Catalog checks for clinical codings.
//!
//! Coding-level issues carry an empty location id: they point at the coding
//! inside whatever record embeds it, not at a record of their own.
//!
//! Version handling differs per system: ICD-10-GM falls back to a default
//! release when the coding omits the version, ICD-O-3 requires one. The code
//! lookup only runs when the version resolved - it would be meaningless
//! against an unknown release.

use mtb_catalogs::DEFAULT_ICD10GM_VERSION;
use mtb_model::{Coding, Issue, Location, error};

use crate::checks::Collector;
use crate::context::Catalogs;

pub(crate) fn validate_icd10(coding: &Coding, catalogs: &Catalogs<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("ICD-10-GM Coding", "", attribute);

    let version = match coding.version.as_deref() {
        None => Some(DEFAULT_ICD10GM_VERSION),
        Some(version) if catalogs.icd10.is_version(version) => Some(version),
        Some(version) => {
            acc.push(
                error(format!("Unknown ICD-10-GM version '{version}'")).at(loc("version")),
            );
            None
        }
    };

    if let Some(version) = version
        && !catalogs.icd10.contains(version, &coding.code)
    {
        acc.push(
            error(format!(
                "Invalid ICD-10-GM code '{}' for version {version}",
                coding.code
            ))
            .at(loc("code")),
        );
    }

    acc.into_issues()
}

pub(crate) fn validate_icd_o3_topography(coding: &Coding, catalogs: &Catalogs<'_>) -> Vec<Issue> {
    validate_icd_o3(coding, catalogs, "ICD-O-3-T Coding", |version, code| {
        catalogs.icd_o3.topography_contains(version, code)
    })
}

pub(crate) fn validate_icd_o3_morphology(coding: &Coding, catalogs: &Catalogs<'_>) -> Vec<Issue> {
    validate_icd_o3(coding, catalogs, "ICD-O-3-M Coding", |version, code| {
        catalogs.icd_o3.morphology_contains(version, code)
    })
}

fn validate_icd_o3(
    coding: &Coding,
    catalogs: &Catalogs<'_>,
    entity: &str,
    contains: impl Fn(&str, &str) -> bool,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new(entity, "", attribute);

    let version = match coding.version.as_deref() {
        None => {
            acc.push(error("Missing ICD-O-3 version").at(loc("version")));
            None
        }
        Some(version) if catalogs.icd_o3.is_version(version) => Some(version),
        Some(version) => {
            acc.push(error(format!("Unknown ICD-O-3 version '{version}'")).at(loc("version")));
            None
        }
    };

    if let Some(version) = version
        && !contains(version, &coding.code)
    {
        acc.push(
            error(format!(
                "Invalid {} code '{}' for version {version}",
                entity_code_system(entity),
                coding.code
            ))
            .at(loc("code")),
        );
    }

    acc.into_issues()
}

fn entity_code_system(entity: &str) -> &str {
    entity.strip_suffix(" Coding").unwrap_or(entity)
}

/// ATC lookup for one medication coding.
pub(crate) fn validate_medication(coding: &Coding, catalogs: &Catalogs<'_>) -> Vec<Issue> {
    if catalogs.medications.contains(&coding.code) {
        return Vec::new();
    }
    vec![
        error(format!("Invalid ATC medication code '{}'", coding.code))
            .at(Location::new("Medication Coding", "", "code")),
    ]
}

pub(crate) fn validate_medications(codings: &[Coding], catalogs: &Catalogs<'_>) -> Vec<Issue> {
    codings
        .iter()
        .flat_map(|coding| validate_medication(coding, catalogs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtb_catalogs::{AtcCatalog, Icd10GmCatalog, IcdO3Catalog};

    fn catalogs() -> (Icd10GmCatalog, IcdO3Catalog, AtcCatalog) {
        let mut icd10 = Icd10GmCatalog::new();
        icd10.insert("2019", "C25.0");
        let mut icd_o3 = IcdO3Catalog::new();
        icd_o3.insert_topography("2014", "C25.0");
        icd_o3.insert_morphology("2014", "8140/3");
        let mut atc = AtcCatalog::new();
        atc.insert("L01BC02");
        (icd10, icd_o3, atc)
    }

    fn bundle<'a>(
        icd10: &'a Icd10GmCatalog,
        icd_o3: &'a IcdO3Catalog,
        atc: &'a AtcCatalog,
    ) -> Catalogs<'a> {
        Catalogs {
            icd10,
            icd_o3,
            medications: atc,
        }
    }

    #[test]
    fn icd10_defaults_to_2019() {
        let (icd10, icd_o3, atc) = catalogs();
        let catalogs = bundle(&icd10, &icd_o3, &atc);

        assert!(validate_icd10(&Coding::new("C25.0"), &catalogs).is_empty());

        let issues = validate_icd10(&Coding::new("X99.9"), &catalogs);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("X99.9"));
        assert_eq!(issues[0].location.attribute, "code");
        assert_eq!(issues[0].location.id, "");
    }

    #[test]
    fn icd10_unknown_version_skips_code_lookup() {
        let (icd10, icd_o3, atc) = catalogs();
        let catalogs = bundle(&icd10, &icd_o3, &atc);

        let issues = validate_icd10(&Coding::with_version("C25.0", "1897"), &catalogs);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Unknown ICD-10-GM version"));
        assert_eq!(issues[0].location.attribute, "version");
    }

    #[test]
    fn icd_o3_requires_a_version() {
        let (icd10, icd_o3, atc) = catalogs();
        let catalogs = bundle(&icd10, &icd_o3, &atc);

        let issues = validate_icd_o3_morphology(&Coding::new("8140/3"), &catalogs);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Missing ICD-O-3 version");

        assert!(
            validate_icd_o3_morphology(&Coding::with_version("8140/3", "2014"), &catalogs)
                .is_empty()
        );
        let issues =
            validate_icd_o3_topography(&Coding::with_version("8140/3", "2014"), &catalogs);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("ICD-O-3-T"));
    }

    #[test]
    fn medication_codes_must_be_atc() {
        let (icd10, icd_o3, atc) = catalogs();
        let catalogs = bundle(&icd10, &icd_o3, &atc);

        assert!(validate_medication(&Coding::new("L01BC02"), &catalogs).is_empty());
        let issues = validate_medications(
            &[Coding::new("L01BC02"), Coding::new("BOGUS")],
            &catalogs,
        );
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("BOGUS"));
    }
}
