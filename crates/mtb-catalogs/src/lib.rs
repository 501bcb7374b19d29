//! Clinical code catalogs consumed by MTB file validation.
//!
//! Three code systems are supported:
//!
//! - **ICD-10-GM** - diagnosis codes, versioned yearly ([`Icd10GmCatalog`])
//! - **ICD-O-3** - oncology topography and morphology codes, versioned
//!   ([`IcdO3Catalog`])
//! - **ATC** - medication codes, unversioned ([`AtcCatalog`])
//!
//! Catalogs are loaded once at startup from a directory of CSV files and are
//! immutable afterwards; all lookups take `&self`, so a loaded catalog is
//! safe for concurrent reads. The validator consumes catalogs through the
//! lookup traits in [`traits`], which lets tests inject small in-memory
//! catalogs instead of full exports.

#![deny(unsafe_code)]

pub mod atc;
mod csv_util;
pub mod error;
pub mod icd10gm;
pub mod icd_o3;
pub mod traits;

use std::path::Path;

pub use atc::AtcCatalog;
pub use error::CatalogError;
pub use icd10gm::{DEFAULT_ICD10GM_VERSION, Icd10GmCatalog};
pub use icd_o3::IcdO3Catalog;
pub use traits::{Icd10Lookup, IcdO3Lookup, MedicationLookup};

/// Conventional file names inside a catalog directory.
pub const ICD10GM_FILE: &str = "icd10gm.csv";
pub const ICDO3_TOPOGRAPHY_FILE: &str = "icdo3-topography.csv";
pub const ICDO3_MORPHOLOGY_FILE: &str = "icdo3-morphology.csv";
pub const ATC_FILE: &str = "atc.csv";

/// All catalogs loaded from one directory.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub icd10: Icd10GmCatalog,
    pub icd_o3: IcdO3Catalog,
    pub atc: AtcCatalog,
}

impl CatalogSet {
    /// Load every catalog from `dir`, expecting the conventional file names.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        Ok(Self {
            icd10: Icd10GmCatalog::load(&dir.join(ICD10GM_FILE))?,
            icd_o3: IcdO3Catalog::load(
                &dir.join(ICDO3_TOPOGRAPHY_FILE),
                &dir.join(ICDO3_MORPHOLOGY_FILE),
            )?,
            atc: AtcCatalog::load(&dir.join(ATC_FILE))?,
        })
    }
}
