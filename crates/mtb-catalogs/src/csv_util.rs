//! Shared helpers for the header-indexed catalog CSV parsers.

use std::path::Path;

use crate::error::CatalogError;

pub(crate) fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

pub(crate) fn require_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, CatalogError> {
    header_index(headers, name).ok_or_else(|| CatalogError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

pub(crate) fn get_string(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
