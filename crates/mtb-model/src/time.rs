//! Period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A period with a known start and an optional end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenEndPeriod {
    pub start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl OpenEndPeriod {
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, end: None }
    }
}

/// A period with both bounds known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
