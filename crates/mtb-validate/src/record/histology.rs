//! Histology-report and molecular-pathology-finding validation.

use mtb_model::{
    HistologyReport, Issue, Location, MolecularPathologyFinding, TumorCellContent,
    TumorCellContentMethod, error, fatal, warning,
};

use crate::checks::{Collector, equal, in_range, member, required};
use crate::coding::validate_icd_o3_morphology;
use crate::context::ValidationContext;
use crate::record::patient_reference;

pub fn validate_histology_report(
    report: &HistologyReport,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| Location::new("HistologyReport", report.id.as_str(), attribute);

    acc.check(patient_reference(
        &report.patient,
        ctx,
        "HistologyReport",
        report.id.as_str(),
    ));
    acc.check(member(&report.specimen, &ctx.specimens, || {
        fatal(format!("Invalid Reference to Specimen '{}'", report.specimen)).at(loc("specimen"))
    }));
    acc.check(required(report.issued_on, || {
        error("Missing Issue Date").at(loc("issuedOn"))
    }));

    if let Some(morphology) = acc.check(required(report.morphology.as_ref(), || {
        error("Missing Tumor Morphology").at(loc("morphology"))
    })) {
        acc.extend(validate_icd_o3_morphology(&morphology.value, &ctx.catalogs));
    }

    if let Some(content) = acc.check(required(report.tumor_content.as_ref(), || {
        error("Missing Tumor Cell Content").at(loc("tumorContent"))
    })) {
        check_tumor_cell_content(
            &mut acc,
            content,
            TumorCellContentMethod::Histologic,
            ctx,
            &loc,
        );
    }

    acc.into_issues()
}

pub fn validate_molecular_pathology_finding(
    finding: &MolecularPathologyFinding,
    ctx: &ValidationContext<'_>,
) -> Vec<Issue> {
    let mut acc = Collector::new();
    let loc = |attribute: &str| {
        Location::new("MolecularPathologyFinding", finding.id.as_str(), attribute)
    };

    acc.check(patient_reference(
        &finding.patient,
        ctx,
        "MolecularPathologyFinding",
        finding.id.as_str(),
    ));
    acc.check(member(&finding.specimen, &ctx.specimens, || {
        fatal(format!(
            "Invalid Reference to Specimen '{}'",
            finding.specimen
        ))
        .at(loc("specimen"))
    }));
    acc.check(required(finding.issued_on, || {
        warning("Missing Issue Date").at(loc("issuedOn"))
    }));

    acc.into_issues()
}

/// Shared by histology and NGS reports: the embedded tumor cell content must
/// reference an existing specimen, use the method matching the report kind
/// and carry a fraction in `[0,1]`.
pub(crate) fn check_tumor_cell_content(
    acc: &mut Collector,
    content: &TumorCellContent,
    expected_method: TumorCellContentMethod,
    ctx: &ValidationContext<'_>,
    loc: &impl Fn(&str) -> Location,
) {
    acc.check(member(&content.specimen, &ctx.specimens, || {
        fatal(format!(
            "Invalid Reference to Specimen '{}'",
            content.specimen
        ))
        .at(loc("tumorContent"))
    }));
    acc.check(equal(&content.method, &expected_method, || {
        error(format!(
            "TumorCellContent method must be '{}'",
            expected_method.label()
        ))
        .at(loc("tumorContent"))
    }));
    acc.check(in_range(content.value, 0.0..=1.0, || {
        error(format!(
            "TumorCellContent value {} out of range [0.0,1.0]",
            content.value
        ))
        .at(loc("tumorContent"))
    }));
}
