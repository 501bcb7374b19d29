//! ICD-10-GM catalog.
//!
//! Expects a CSV export with `Version`, `Code` and optional `Label` columns,
//! one row per code per release (e.g. `2019,C25.0,...`).

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::csv_util::{get_string, require_column};
use crate::error::CatalogError;
use crate::traits::Icd10Lookup;

/// Release assumed when a coding carries no version.
pub const DEFAULT_ICD10GM_VERSION: &str = "2019";

#[derive(Debug, Clone, Default)]
pub struct Icd10GmCatalog {
    codes_by_version: BTreeMap<String, BTreeSet<String>>,
}

impl Icd10GmCatalog {
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

        let idx_version = require_column(&headers, "Version", path)?;
        let idx_code = require_column(&headers, "Code", path)?;

        let mut catalog = Self::new();
        for row in reader.records() {
            let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
            if let Some(version) = get_string(&row, idx_version)
                && let Some(code) = get_string(&row, idx_code)
            {
                catalog.insert(version, code);
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, version: impl Into<String>, code: impl Into<String>) {
        self.codes_by_version
            .entry(version.into())
            .or_default()
            .insert(code.into());
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.codes_by_version.keys().map(String::as_str)
    }

    pub fn codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.codes_by_version.get(version)
    }

    pub fn code_count(&self) -> usize {
        self.codes_by_version.values().map(BTreeSet::len).sum()
    }
}

impl Icd10Lookup for Icd10GmCatalog {
    fn is_version(&self, version: &str) -> bool {
        self.codes_by_version.contains_key(version)
    }

    fn contains(&self, version: &str, code: &str) -> bool {
        self.codes_by_version
            .get(version)
            .is_some_and(|codes| codes.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_versioned_codes() {
        let input = b"Version,Code,Label\n2019,C25.0,Head of pancreas\n2019,C25.1,Body of pancreas\n2020,C25.0,Head of pancreas\n";
        let catalog =
            Icd10GmCatalog::parse(input, Path::new("icd10gm.csv")).expect("parse catalog");

        assert!(catalog.is_version("2019"));
        assert!(catalog.is_version("2020"));
        assert!(!catalog.is_version("1999"));
        assert!(catalog.contains("2019", "C25.0"));
        assert!(!catalog.contains("2020", "C25.1"));
        assert_eq!(catalog.code_count(), 3);
    }

    #[test]
    fn rejects_missing_columns() {
        let input = b"Release,Code\n2019,C25.0\n";
        let err = Icd10GmCatalog::parse(input, Path::new("icd10gm.csv"))
            .expect_err("should fail without Version column");
        assert!(matches!(err, CatalogError::MissingColumn { column, .. } if column == "Version"));
    }
}
