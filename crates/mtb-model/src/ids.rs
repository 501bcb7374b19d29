//! Typed identifiers for MTB records.
//!
//! Every record kind carries its own id newtype so that cross-references
//! between records cannot be mixed up at compile time. Guideline therapies
//! and molecular therapies share [`TherapyId`]: therapy responses may
//! reference either kind.

use std::fmt;

macro_rules! id_type {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(
                Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
                serde::Serialize, serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

id_type!(
    PatientId,
    ConsentId,
    EpisodeId,
    DiagnosisId,
    /// Shared by previous/last guideline therapies and molecular therapies.
    TherapyId,
    EcogStatusId,
    SpecimenId,
    HistologyReportId,
    MolecularPathologyFindingId,
    NgsReportId,
    CarePlanId,
    TherapyRecommendationId,
    GeneticCounsellingRequestId,
    RebiopsyRequestId,
    HistologyReevaluationRequestId,
    StudyInclusionRequestId,
    ClaimId,
    ClaimResponseId,
    ResponseId,
);
