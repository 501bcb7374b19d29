//! Somatic-NGS-report validation.

use mtb_model::{Issue, Location, SomaticNgsReport, TumorCellContentMethod, error, fatal, info};

use crate::checks::{Collector, in_range, member, required};
use crate::context::ValidationContext;
use crate::record::histology::check_tumor_cell_content;
use crate::record::patient_reference;

const ENTITY: &str = "SomaticNGSReport";

/// Marker scores are optional; when present they must lie in their reference
/// intervals (BRCAness `[0,1]`, MSI `[0,2]`, TMB `[0,1000000]` mut/Mb).
pub fn validate_ngs_report(report: &SomaticNgsReport, ctx: &ValidationContext<'_>) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new(ENTITY, report.id.as_str(), attribute);

    acc.check(patient_reference(&report.patient, ctx, ENTITY, report.id.as_str()));
    acc.check(member(&report.specimen, &ctx.specimens, || {
        fatal(format!("Invalid Reference to Specimen '{}'", report.specimen)).at(loc("specimen"))
    }));

    check_tumor_cell_content(
        &mut acc,
        &report.tumor_content,
        TumorCellContentMethod::Bioinformatic,
        ctx,
        &loc,
    );

    if let Some(brcaness) = acc.check(required(report.brcaness, || {
        info("Missing BRCAness").at(loc("brcaness"))
    })) {
        acc.check(in_range(brcaness, 0.0..=1.0, || {
            error(format!("BRCAness value {brcaness} out of range [0.0,1.0]")).at(loc("brcaness"))
        }));
    }

    if let Some(msi) = acc.check(required(report.msi, || {
        info("Missing MSI").at(loc("msi"))
    })) {
        acc.check(in_range(msi, 0.0..=2.0, || {
            error(format!("MSI value {msi} out of range [0.0,2.0]")).at(loc("msi"))
        }));
    }

    acc.check(in_range(report.tmb.value, 0.0..=1_000_000.0, || {
        error(format!(
            "TMB value {} mut/Mb out of range [0.0,1000000.0]",
            report.tmb.value
        ))
        .at(loc("tmb"))
    }));

    acc.into_issues()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtb_catalogs::{AtcCatalog, Icd10GmCatalog, IcdO3Catalog};
    use mtb_model::{PatientId, Severity, Tmb, TumorCellContent};

    fn make_report() -> SomaticNgsReport {
        SomaticNgsReport {
            id: "NGS1".into(),
            patient: PatientId::new("P1"),
            specimen: "S1".into(),
            issued_on: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            tumor_content: TumorCellContent {
                specimen: "S1".into(),
                method: TumorCellContentMethod::Bioinformatic,
                value: 0.7,
            },
            brcaness: Some(0.4),
            msi: Some(1.2),
            tmb: Tmb { value: 12.5 },
        }
    }

    fn run(report: &SomaticNgsReport) -> Vec<Issue> {
        let icd10 = Icd10GmCatalog::new();
        let icd_o3 = IcdO3Catalog::new();
        let atc = AtcCatalog::new();
        let patient = PatientId::new("P1");
        let ctx = ValidationContext {
            patient: &patient,
            today: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            catalogs: crate::context::Catalogs {
                icd10: &icd10,
                icd_o3: &icd_o3,
                medications: &atc,
            },
            diagnoses: Default::default(),
            icd10_codes: Default::default(),
            specimens: ["S1".into()].into(),
            histology_reports: Default::default(),
            care_plans: Default::default(),
            recommendations: Default::default(),
            counselling_requests: Default::default(),
            rebiopsy_requests: Default::default(),
            claims: Default::default(),
            therapies: Default::default(),
            responded_therapies: Default::default(),
        };
        validate_ngs_report(report, &ctx)
    }

    #[test]
    fn valid_report_is_clean() {
        assert!(run(&make_report()).is_empty());
    }

    #[test]
    fn histologic_method_is_rejected() {
        let mut report = make_report();
        report.tumor_content.method = TumorCellContentMethod::Histologic;
        let issues = run(&report);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("bioinformatic"));
    }

    #[test]
    fn tumor_content_bounds() {
        let mut report = make_report();
        report.tumor_content.value = 1.0;
        assert!(run(&report).is_empty());

        report.tumor_content.value = 1.0001;
        let issues = run(&report);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("[0.0,1.0]"));
    }

    #[test]
    fn negative_tmb_is_an_error() {
        let mut report = make_report();
        report.tmb = Tmb { value: -1.0 };
        let issues = run(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].location.attribute, "tmb");
        assert!(issues[0].message.contains("[0.0,1000000.0]"));
    }

    #[test]
    fn missing_markers_are_infos() {
        let mut report = make_report();
        report.brcaness = None;
        report.msi = None;
        let issues = run(&report);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|issue| issue.severity == Severity::Info));
    }
}
