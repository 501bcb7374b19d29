//! Data model for Molecular Tumor Board (MTB) case files.
//!
//! This crate provides the entity types that make up an MTB case file
//! (patient, consent, diagnoses, therapies, specimens, reports, care plans)
//! together with the data-quality issue model produced by validation.
//!
//! All entities are immutable value objects with typed identifiers. They
//! (de)serialize to the camelCase JSON wire format used by the intake
//! service.
//!
//! # Modules
//!
//! - [`ids`] - Typed identifiers for every record kind
//! - [`coding`] - Clinical codings (ICD-10-GM, ICD-O-3, ATC)
//! - [`time`] - Period types
//! - [`patient`] - Patient, consent, episode, ECOG status
//! - [`diagnosis`] - Tumor diagnoses
//! - [`therapy`] - Guideline therapies
//! - [`specimen`] - Tumor specimens
//! - [`histology`] - Histology and molecular-pathology reports
//! - [`ngs`] - Somatic NGS reports
//! - [`care_plan`] - Care plans, recommendations and follow-up requests
//! - [`claim`] - Cost claims and claim responses
//! - [`molecular_therapy`] - Molecular therapies and responses
//! - [`mtb_file`] - The MTB file aggregate
//! - [`quality`] - Severity, issue and data-quality report types

#![deny(unsafe_code)]

pub mod care_plan;
pub mod claim;
pub mod coding;
pub mod diagnosis;
pub mod histology;
pub mod ids;
pub mod molecular_therapy;
pub mod mtb_file;
pub mod ngs;
pub mod patient;
pub mod quality;
pub mod specimen;
pub mod therapy;
pub mod time;

pub use care_plan::{
    CarePlan, GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest,
    StudyInclusionRequest, TherapyPriority, TherapyRecommendation,
};
pub use claim::{Claim, ClaimResponse, ClaimStatus};
pub use coding::Coding;
pub use diagnosis::Diagnosis;
pub use histology::{
    HistologyReport, MolecularPathologyFinding, TumorCellContent, TumorCellContentMethod,
    TumorMorphology,
};
pub use ids::{
    CarePlanId, ClaimId, ClaimResponseId, ConsentId, DiagnosisId, EcogStatusId, EpisodeId,
    GeneticCounsellingRequestId, HistologyReevaluationRequestId, HistologyReportId,
    MolecularPathologyFindingId, NgsReportId, PatientId, RebiopsyRequestId, ResponseId,
    SpecimenId, StudyInclusionRequestId, TherapyId, TherapyRecommendationId,
};
pub use molecular_therapy::{MolecularTherapy, MolecularTherapyHistory, Response};
pub use mtb_file::MtbFile;
pub use ngs::{SomaticNgsReport, Tmb};
pub use patient::{Consent, ConsentStatus, EcogStatus, Gender, MtbEpisode, Patient};
pub use quality::{DataQualityReport, Issue, Location, Severity, error, fatal, info, warning};
pub use specimen::{
    CollectionLocalization, CollectionMethod, Specimen, SpecimenCollection, SpecimenType,
};
pub use therapy::{LastGuidelineTherapy, PreviousGuidelineTherapy, TherapyLine};
pub use time::{ClosedPeriod, OpenEndPeriod};
