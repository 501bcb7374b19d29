//! Lookup interfaces consumed by the validator.
//!
//! The validator never touches catalog loading; it only asks membership
//! questions through these traits. Tests inject small in-memory catalogs
//! built with the `insert` constructors of the concrete types.

/// ICD-10-GM diagnosis codes, versioned yearly.
pub trait Icd10Lookup: Send + Sync {
    /// Whether `version` is a known ICD-10-GM release.
    fn is_version(&self, version: &str) -> bool;

    /// Whether `code` exists in the given release.
    fn contains(&self, version: &str, code: &str) -> bool;
}

/// ICD-O-3 topography and morphology codes, versioned.
pub trait IcdO3Lookup: Send + Sync {
    /// Whether `version` is a known ICD-O-3 release.
    fn is_version(&self, version: &str) -> bool;

    fn topography_contains(&self, version: &str, code: &str) -> bool;

    fn morphology_contains(&self, version: &str, code: &str) -> bool;
}

/// ATC medication codes.
pub trait MedicationLookup: Send + Sync {
    fn contains(&self, atc_code: &str) -> bool;
}
