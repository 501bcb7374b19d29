//! ATC medication catalog.
//!
//! Expects a CSV export with `Code` and optional `Name` columns.

use std::collections::BTreeSet;
use std::path::Path;

use crate::csv_util::{get_string, require_column};
use crate::error::CatalogError;
use crate::traits::MedicationLookup;

#[derive(Debug, Clone, Default)]
pub struct AtcCatalog {
    codes: BTreeSet<String>,
}

impl AtcCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
        Self::parse(bytes.as_slice(), path)
    }

    fn parse(input: &[u8], path: &Path) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);
        let headers = reader
            .headers()
            .map_err(|e| CatalogError::csv(path, e.to_string()))?
            .clone();

        let idx_code = require_column(&headers, "Code", path)?;

        let mut catalog = Self::new();
        for row in reader.records() {
            let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
            if let Some(code) = get_string(&row, idx_code) {
                catalog.insert(code);
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, code: impl Into<String>) {
        self.codes.insert(code.into());
    }

    pub fn codes(&self) -> &BTreeSet<String> {
        &self.codes
    }
}

impl MedicationLookup for AtcCatalog {
    fn contains(&self, atc_code: &str) -> bool {
        self.codes.contains(atc_code)
    }
}
