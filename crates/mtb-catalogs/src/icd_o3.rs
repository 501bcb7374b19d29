//! ICD-O-3 topography and morphology catalog.
//!
//! Both axes are loaded from CSV exports with `Version`, `Code` and optional
//! `Label` columns. A release is considered known when either axis carries
//! codes for it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::csv_util::{get_string, require_column};
use crate::error::CatalogError;
use crate::traits::IcdO3Lookup;

#[derive(Debug, Clone, Default)]
pub struct IcdO3Catalog {
    topography: BTreeMap<String, BTreeSet<String>>,
    morphology: BTreeMap<String, BTreeSet<String>>,
}

impl IcdO3Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(topography_path: &Path, morphology_path: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        load_axis(topography_path, &mut catalog.topography)?;
        load_axis(morphology_path, &mut catalog.morphology)?;
        Ok(catalog)
    }

    pub fn insert_topography(&mut self, version: impl Into<String>, code: impl Into<String>) {
        self.topography
            .entry(version.into())
            .or_default()
            .insert(code.into());
    }

    pub fn insert_morphology(&mut self, version: impl Into<String>, code: impl Into<String>) {
        self.morphology
            .entry(version.into())
            .or_default()
            .insert(code.into());
    }

    pub fn versions(&self) -> BTreeSet<&str> {
        self.topography
            .keys()
            .chain(self.morphology.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn topography_codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.topography.get(version)
    }

    pub fn morphology_codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.morphology.get(version)
    }
}

impl IcdO3Lookup for IcdO3Catalog {
    fn is_version(&self, version: &str) -> bool {
        self.topography.contains_key(version) || self.morphology.contains_key(version)
    }

    fn topography_contains(&self, version: &str, code: &str) -> bool {
        self.topography
            .get(version)
            .is_some_and(|codes| codes.contains(code))
    }

    fn morphology_contains(&self, version: &str, code: &str) -> bool {
        self.morphology
            .get(version)
            .is_some_and(|codes| codes.contains(code))
    }
}

fn load_axis(
    path: &Path,
    into: &mut BTreeMap<String, BTreeSet<String>>,
) -> Result<(), CatalogError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    parse_axis(bytes.as_slice(), path, into)
}

fn parse_axis(
    input: &[u8],
    path: &Path,
    into: &mut BTreeMap<String, BTreeSet<String>>,
) -> Result<(), CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::csv(path, e.to_string()))?
        .clone();

    let idx_version = require_column(&headers, "Version", path)?;
    let idx_code = require_column(&headers, "Code", path)?;

    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
        if let Some(version) = get_string(&row, idx_version)
            && let Some(code) = get_string(&row, idx_code)
        {
            into.entry(version).or_default().insert(code);
        }
    }
    Ok(())
}
