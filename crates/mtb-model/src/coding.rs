//! Clinical codings.
//!
//! A [`Coding`] pairs a code from an external code system (ICD-10-GM,
//! ICD-O-3 topography/morphology, ATC) with an optional display text and
//! an optional code-system version. Which system a coding belongs to is
//! determined by the field it occupies, not by the coding itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Code-system version, e.g. `"2019"` for ICD-10-GM. Versioning rules
    /// differ per system; ATC codings carry no version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coding {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            version: None,
        }
    }

    pub fn with_version(code: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            version: Some(version.into()),
        }
    }
}
