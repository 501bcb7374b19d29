//! End-to-end checks of the MTB-file orchestrator.

use chrono::NaiveDate;
use mtb_catalogs::{AtcCatalog, Icd10GmCatalog, IcdO3Catalog};
use mtb_model::{
    CarePlan, Claim, ClaimResponse, Coding, CollectionLocalization, CollectionMethod, Consent,
    ConsentStatus, DataQualityReport, Diagnosis, EcogStatus, Gender, HistologyReport,
    LastGuidelineTherapy, MolecularPathologyFinding, MolecularTherapy, MolecularTherapyHistory,
    MtbEpisode, MtbFile, OpenEndPeriod, Patient, PatientId, PreviousGuidelineTherapy, Response,
    Severity, SomaticNgsReport, Specimen, SpecimenCollection, SpecimenType, StudyInclusionRequest,
    TherapyLine, TherapyPriority, TherapyRecommendation, Tmb, TumorCellContent,
    TumorCellContentMethod, TumorMorphology,
};
use mtb_validate::{Catalogs, Validator};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2023, 6, 1)
}

/// A complete, internally consistent case file that validates without any
/// issue against the test catalogs.
fn make_file() -> MtbFile {
    MtbFile {
        patient: Patient {
            id: PatientId::new("P1"),
            gender: Gender::Female,
            birth_date: Some(date(1970, 1, 1)),
            insurance: Some("107815761".to_string()),
            date_of_death: Some(date(2023, 5, 1)),
        },
        consent: Consent {
            id: "C1".into(),
            patient: PatientId::new("P1"),
            status: ConsentStatus::Active,
        },
        episode: MtbEpisode {
            id: "E1".into(),
            patient: PatientId::new("P1"),
            period: OpenEndPeriod::starting(date(2023, 1, 1)),
        },
        diagnoses: Some(vec![Diagnosis {
            id: "D1".into(),
            patient: PatientId::new("P1"),
            recorded_on: Some(date(2023, 1, 10)),
            icd10: Some(Coding::with_version("C25.0", "2019")),
            icd_o3_t: Some(Coding::with_version("C25.0", "2014")),
            histology_reports: Some(vec!["H1".into()]),
        }]),
        previous_guideline_therapies: Some(vec![PreviousGuidelineTherapy {
            id: "PGT1".into(),
            patient: PatientId::new("P1"),
            diagnosis: "D1".into(),
            therapy_line: Some(TherapyLine(1)),
            medication: Some(vec![Coding::new("L01BC02")]),
        }]),
        last_guideline_therapy: Some(LastGuidelineTherapy {
            id: "LGT1".into(),
            patient: PatientId::new("P1"),
            diagnosis: "D1".into(),
            therapy_line: Some(TherapyLine(3)),
            medication: Some(vec![Coding::new("L01BC02")]),
            period: Some(OpenEndPeriod {
                start: date(2022, 6, 1),
                end: Some(date(2022, 12, 1)),
            }),
            reason_stopped: Some(Coding::new("progression")),
        }),
        ecog_status: Some(vec![EcogStatus {
            id: "ECOG1".into(),
            patient: PatientId::new("P1"),
            effective_date: Some(date(2023, 1, 15)),
            value: Coding::new("1"),
        }]),
        specimens: Some(vec![Specimen {
            id: "S1".into(),
            patient: PatientId::new("P1"),
            icd10: Coding::with_version("C25.0", "2019"),
            specimen_type: Some(SpecimenType::Ffpe),
            collection: Some(SpecimenCollection {
                date: date(2023, 2, 1),
                localization: CollectionLocalization::Primary,
                method: CollectionMethod::Biopsy,
            }),
        }]),
        histology_reports: Some(vec![HistologyReport {
            id: "H1".into(),
            patient: PatientId::new("P1"),
            specimen: "S1".into(),
            issued_on: Some(date(2023, 2, 10)),
            morphology: Some(TumorMorphology {
                value: Coding::with_version("8140/3", "2014"),
                note: None,
            }),
            tumor_content: Some(TumorCellContent {
                specimen: "S1".into(),
                method: TumorCellContentMethod::Histologic,
                value: 0.6,
            }),
        }]),
        molecular_pathology_findings: Some(vec![MolecularPathologyFinding {
            id: "MPF1".into(),
            patient: PatientId::new("P1"),
            specimen: "S1".into(),
            issued_on: Some(date(2023, 2, 20)),
            note: None,
        }]),
        ngs_reports: Some(vec![SomaticNgsReport {
            id: "NGS1".into(),
            patient: PatientId::new("P1"),
            specimen: "S1".into(),
            issued_on: date(2023, 3, 1),
            tumor_content: TumorCellContent {
                specimen: "S1".into(),
                method: TumorCellContentMethod::Bioinformatic,
                value: 0.7,
            },
            brcaness: Some(0.4),
            msi: Some(1.2),
            tmb: Tmb { value: 12.5 },
        }]),
        care_plans: Some(vec![CarePlan {
            id: "CP1".into(),
            patient: PatientId::new("P1"),
            diagnosis: "D1".into(),
            issued_on: Some(date(2023, 3, 15)),
            description: None,
            recommendations: Some(vec!["TR1".into()]),
            genetic_counselling_request: None,
            rebiopsy_requests: None,
        }]),
        recommendations: Some(vec![TherapyRecommendation {
            id: "TR1".into(),
            patient: PatientId::new("P1"),
            issued_on: Some(date(2023, 3, 15)),
            medication: vec![Coding::new("L01BC02")],
            priority: Some(TherapyPriority::One),
            level_of_evidence: Some(Coding::new("m1A")),
        }]),
        genetic_counselling_requests: None,
        rebiopsy_requests: None,
        histology_reevaluation_requests: None,
        study_inclusion_requests: None,
        claims: Some(vec![Claim {
            id: "CL1".into(),
            patient: PatientId::new("P1"),
            therapy: "TR1".into(),
        }]),
        claim_responses: Some(vec![ClaimResponse {
            id: "CLR1".into(),
            patient: PatientId::new("P1"),
            claim: "CL1".into(),
            issued_on: Some(date(2023, 4, 1)),
            status: Some(mtb_model::ClaimStatus::Accepted),
            reason: Some(Coding::new("approved")),
        }]),
        molecular_therapies: Some(vec![MolecularTherapyHistory {
            history: vec![MolecularTherapy::Ongoing {
                id: "MT1".into(),
                patient: PatientId::new("P1"),
                based_on: "TR1".into(),
                recorded_on: Some(date(2023, 4, 15)),
                period: Some(OpenEndPeriod::starting(date(2023, 4, 10))),
                medication: Some(vec![Coding::new("L01BC02")]),
                note: None,
            }],
        }]),
        responses: Some(vec![Response {
            id: "R1".into(),
            patient: PatientId::new("P1"),
            therapy: "LGT1".into(),
            effective_date: Some(date(2023, 1, 5)),
            value: Some(Coding::new("PD")),
        }]),
    }
}

fn run_check(file: MtbFile) -> Result<MtbFile, DataQualityReport> {
    let mut icd10 = Icd10GmCatalog::new();
    icd10.insert("2019", "C25.0");
    icd10.insert("2019", "C61");

    let mut icd_o3 = IcdO3Catalog::new();
    icd_o3.insert_topography("2014", "C25.0");
    icd_o3.insert_morphology("2014", "8140/3");

    let mut atc = AtcCatalog::new();
    atc.insert("L01BC02");

    let catalogs = Catalogs {
        icd10: &icd10,
        icd_o3: &icd_o3,
        medications: &atc,
    };
    Validator::new(catalogs).with_today(today()).check(file)
}

#[test]
fn valid_file_passes_unchanged() {
    let file = make_file();
    let expected = file.clone();
    let checked = run_check(file).expect("valid file should check ok");
    assert_eq!(checked, expected);
}

#[test]
fn check_is_deterministic() {
    let mut file = make_file();
    file.patient.birth_date = None;
    let first = run_check(file.clone()).expect_err("should report issues");
    let second = run_check(file).expect_err("should report issues");
    assert_eq!(first, second);
}

#[test]
fn missing_birth_date_reports_exactly_one_error() {
    let mut file = make_file();
    file.patient.birth_date = None;

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.patient_id, PatientId::new("P1"));
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.message, "Missing BirthDate");
    assert_eq!(issue.location.entity_type, "Patient");
    assert_eq!(issue.location.id, "P1");
    assert_eq!(issue.location.attribute, "birthdate");
}

#[test]
fn dangling_histology_reference_is_fatal() {
    let mut file = make_file();
    file.diagnoses.as_mut().unwrap()[0].histology_reports =
        Some(vec!["H1".into(), "H_missing".into()]);

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Fatal);
    assert!(issue.message.contains("H_missing"));
    assert_eq!(issue.location.entity_type, "Diagnosis");
    assert_eq!(issue.location.id, "D1");
    assert_eq!(issue.location.attribute, "histologyReports");
}

#[test]
fn rejected_consent_locks_every_body_slot() {
    let mut file = make_file();
    file.consent.status = ConsentStatus::Rejected;

    let report = run_check(file).expect_err("should report issues");

    // One fatal per populated slot; patient/consent/episode are clean.
    let populated_slots = 14;
    assert_eq!(report.issues.len(), populated_slots);
    for issue in &report.issues {
        assert_eq!(issue.severity, Severity::Fatal);
        assert_eq!(issue.message, "Data must not be defined for Consent 'Rejected'");
        assert_eq!(issue.location.entity_type, "MTBFile");
        assert_eq!(issue.location.id, "P1");
    }
    assert!(report.issues.iter().any(|i| i.location.attribute == "diagnoses"));
    assert!(report.issues.iter().any(|i| i.location.attribute == "molecularTherapies"));
}

#[test]
fn rejected_consent_with_empty_body_is_ok() {
    let mut file = make_file();
    file.consent.status = ConsentStatus::Rejected;
    file.diagnoses = None;
    file.previous_guideline_therapies = None;
    file.last_guideline_therapy = None;
    file.ecog_status = None;
    file.specimens = None;
    file.histology_reports = None;
    file.molecular_pathology_findings = None;
    file.ngs_reports = None;
    file.care_plans = None;
    file.recommendations = None;
    file.claims = None;
    file.claim_responses = None;
    file.molecular_therapies = None;
    file.responses = None;

    assert!(run_check(file).is_ok());
}

#[test]
fn negative_tmb_reports_reference_range() {
    let mut file = make_file();
    file.ngs_reports.as_mut().unwrap()[0].tmb = Tmb { value: -1.0 };

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert!(issue.message.contains("[0.0,1000000.0]"));
    assert_eq!(issue.location.entity_type, "SomaticNGSReport");
    assert_eq!(issue.location.id, "NGS1");
    assert_eq!(issue.location.attribute, "tmb");
}

#[test]
fn malformed_nct_number_is_an_error() {
    let mut file = make_file();
    file.study_inclusion_requests = Some(vec![StudyInclusionRequest {
        id: "SIR1".into(),
        patient: PatientId::new("P1"),
        diagnosis: "D1".into(),
        nct_number: "NCT1234".to_string(),
        issued_on: Some(date(2023, 3, 20)),
    }]);

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.location.entity_type, "StudyInclusionRequest");
    assert_eq!(issue.location.id, "SIR1");
    assert_eq!(issue.location.attribute, "nctNumber");
}

#[test]
fn well_formed_nct_number_is_accepted() {
    let mut file = make_file();
    file.study_inclusion_requests = Some(vec![StudyInclusionRequest {
        id: "SIR1".into(),
        patient: PatientId::new("P1"),
        diagnosis: "D1".into(),
        nct_number: "NCT00000000".to_string(),
        issued_on: Some(date(2023, 3, 20)),
    }]);

    assert!(run_check(file).is_ok());
}

#[test]
fn therapy_line_boundaries() {
    for line in [0u8, 9] {
        let mut file = make_file();
        file.last_guideline_therapy.as_mut().unwrap().therapy_line = Some(TherapyLine(line));
        assert!(run_check(file).is_ok(), "therapy line {line} should pass");
    }

    let mut file = make_file();
    file.last_guideline_therapy.as_mut().unwrap().therapy_line = Some(TherapyLine(10));
    let report = run_check(file).expect_err("line 10 should be rejected");
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].message.contains("[0,9]"));
}

#[test]
fn tumor_content_boundaries() {
    for value in [0.0, 1.0] {
        let mut file = make_file();
        file.histology_reports.as_mut().unwrap()[0]
            .tumor_content
            .as_mut()
            .unwrap()
            .value = value;
        assert!(run_check(file).is_ok(), "tumor content {value} should pass");
    }

    let mut file = make_file();
    file.histology_reports.as_mut().unwrap()[0]
        .tumor_content
        .as_mut()
        .unwrap()
        .value = 1.0001;
    let report = run_check(file).expect_err("tumor content above 1 should be rejected");
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].message.contains("[0.0,1.0]"));
    assert_eq!(report.issues[0].location.entity_type, "HistologyReport");
}

#[test]
fn foreign_patient_reference_is_fatal_everywhere() {
    let mut file = make_file();
    file.specimens.as_mut().unwrap()[0].patient = PatientId::new("P2");
    file.ecog_status.as_mut().unwrap()[0].patient = PatientId::new("P2");

    let report = run_check(file).expect_err("should report issues");
    let fatal: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.severity == Severity::Fatal)
        .collect();
    assert_eq!(fatal.len(), 2);
    assert!(fatal.iter().all(|issue| issue.location.attribute == "patient"));
}

#[test]
fn missing_collections_accumulate() {
    let mut file = make_file();
    file.diagnoses = None;
    file.specimens = None;

    let report = run_check(file).expect_err("should report issues");

    // Removing the specimens cascades into every record that references S1;
    // the slot-level issues must still both be present.
    assert!(report.issues.iter().any(|issue| {
        issue.severity == Severity::Error
            && issue.message == "Missing Diagnoses"
            && issue.location.attribute == "diagnoses"
    }));
    assert!(report.issues.iter().any(|issue| {
        issue.severity == Severity::Warning
            && issue.message == "Missing Specimens"
            && issue.location.attribute == "specimens"
    }));
    assert!(report.has_errors());
    assert!(report.has_fatal());
}

#[test]
fn unreferenced_last_guideline_therapy_warns_about_missing_response() {
    let mut file = make_file();
    file.responses = Some(vec![Response {
        id: "R1".into(),
        patient: PatientId::new("P1"),
        therapy: "MT1".into(),
        effective_date: None,
        value: None,
    }]);

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].severity, Severity::Warning);
    assert_eq!(report.issues[0].message, "Missing Response");
    assert_eq!(report.issues[0].location.entity_type, "LastGuidelineTherapy");
}

#[test]
fn report_serializes_in_accumulation_order() {
    let mut file = make_file();
    file.patient.birth_date = None;
    file.ngs_reports.as_mut().unwrap()[0].tmb = Tmb { value: -1.0 };

    let report = run_check(file).expect_err("should report issues");
    assert_eq!(report.issues.len(), 2);
    // Patient issues come before report-level issues.
    assert_eq!(report.issues[0].location.entity_type, "Patient");
    assert_eq!(report.issues[1].location.entity_type, "SomaticNGSReport");

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["patientId"], "P1");
    assert_eq!(json["issues"][0]["location"]["entityType"], "Patient");
    assert_eq!(json["issues"][1]["location"]["attribute"], "tmb");
}
