//! Structural and referential validation of MTB case files.
//!
//! This crate implements the data-quality core of the intake service. For
//! one submitted [`MtbFile`](mtb_model::MtbFile) it checks:
//!
//! - **Patient back-references**: every record must belong to the file's
//!   patient
//! - **Referential integrity**: every cross-reference (diagnosis, specimen,
//!   histology report, recommendation, request, claim, therapy) must resolve
//!   within the same file
//! - **Catalog membership**: ICD-10-GM, ICD-O-3 topography/morphology and
//!   ATC codings must exist in their (versioned) catalogs
//! - **Field presence**: required, recommended and informational fields at
//!   Error, Warning and Info severity respectively
//! - **Value ranges**: tumor cell content, BRCAness, MSI, TMB, therapy line
//! - **Formats**: NCT study numbers
//! - **Consent**: with consent status `rejected`, any clinical payload is a
//!   fatal violation
//!
//! All issues of a file are accumulated into one
//! [`DataQualityReport`](mtb_model::DataQualityReport) in a single pass;
//! validation never fails fast and never panics.

#![deny(unsafe_code)]

pub mod check;
pub mod checks;
pub mod context;
mod coding;
pub mod record;

pub use check::Validator;
pub use checks::{Checked, Collector};
pub use context::{Catalogs, ValidationContext};
