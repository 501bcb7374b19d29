//! Validation primitives.
//!
//! A single check yields [`Checked<T>`]: the unwrapped value on success, one
//! [`Issue`] on failure. The issue (and with it the severity) is always
//! supplied by the caller; the primitives only decide pass or fail.
//!
//! Record validators run their checks through a [`Collector`], which keeps
//! every failure and continues - the whole validation accumulates issues
//! instead of stopping at the first one. A check that depends on the value
//! unwrapped by an earlier check simply pattern-matches on the `Option`
//! returned by [`Collector::check`], so dependent checks are skipped when
//! their prerequisite already failed.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use mtb_model::Issue;
use regex::Regex;

pub type Checked<T> = Result<T, Issue>;

/// The value must be present; succeeds with the unwrapped value.
pub fn required<T>(value: Option<T>, issue: impl FnOnce() -> Issue) -> Checked<T> {
    value.ok_or_else(issue)
}

/// The value must be absent.
pub fn forbidden<T>(value: &Option<T>, issue: impl FnOnce() -> Issue) -> Checked<()> {
    match value {
        None => Ok(()),
        Some(_) => Err(issue()),
    }
}

/// The collection must contain at least one element.
pub fn not_empty<T>(items: &[T], issue: impl FnOnce() -> Issue) -> Checked<()> {
    if items.is_empty() {
        return Err(issue());
    }
    Ok(())
}

pub fn equal<T: PartialEq + ?Sized>(
    actual: &T,
    expected: &T,
    issue: impl FnOnce() -> Issue,
) -> Checked<()> {
    if actual != expected {
        return Err(issue());
    }
    Ok(())
}

/// Set membership, used for every cross-reference index lookup.
pub fn member<T: Ord>(value: &T, set: &BTreeSet<T>, issue: impl FnOnce() -> Issue) -> Checked<()> {
    if !set.contains(value) {
        return Err(issue());
    }
    Ok(())
}

/// Closed-interval membership.
pub fn in_range<T: PartialOrd>(
    value: T,
    range: RangeInclusive<T>,
    issue: impl FnOnce() -> Issue,
) -> Checked<()> {
    if !range.contains(&value) {
        return Err(issue());
    }
    Ok(())
}

/// `date` must be strictly before `bound`.
pub fn before(date: NaiveDate, bound: NaiveDate, issue: impl FnOnce() -> Issue) -> Checked<()> {
    if date >= bound {
        return Err(issue());
    }
    Ok(())
}

/// `date` must be strictly after `bound`.
pub fn after(date: NaiveDate, bound: NaiveDate, issue: impl FnOnce() -> Issue) -> Checked<()> {
    if date <= bound {
        return Err(issue());
    }
    Ok(())
}

pub fn matches(value: &str, pattern: &Regex, issue: impl FnOnce() -> Issue) -> Checked<()> {
    if !pattern.is_match(value) {
        return Err(issue());
    }
    Ok(())
}

/// Accumulates the issues of many checks.
#[derive(Debug, Default)]
pub struct Collector {
    issues: Vec<Issue>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the failure of a check, or hand back its unwrapped value so a
    /// dependent check can run on it.
    pub fn check<T>(&mut self, checked: Checked<T>) -> Option<T> {
        match checked {
            Ok(value) => Some(value),
            Err(issue) => {
                self.issues.push(issue);
                None
            }
        }
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Merge the issues of a nested validation, preserving order.
    pub fn extend(&mut self, issues: Vec<Issue>) {
        self.issues.extend(issues);
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtb_model::{Location, Severity, error, warning};

    fn test_issue() -> Issue {
        error("failed").at(Location::new("Test", "T1", "field"))
    }

    #[test]
    fn required_unwraps_present_values() {
        assert_eq!(required(Some(42), test_issue), Ok(42));
        assert!(required(None::<i32>, test_issue).is_err());
    }

    #[test]
    fn forbidden_rejects_present_values() {
        assert!(forbidden(&None::<i32>, test_issue).is_ok());
        assert!(forbidden(&Some(42), test_issue).is_err());
    }

    #[test]
    fn in_range_is_closed() {
        assert!(in_range(0.0, 0.0..=1.0, test_issue).is_ok());
        assert!(in_range(1.0, 0.0..=1.0, test_issue).is_ok());
        assert!(in_range(1.0001, 0.0..=1.0, test_issue).is_err());
        assert!(in_range(-0.0001, 0.0..=1.0, test_issue).is_err());
    }

    #[test]
    fn date_ordering_is_strict() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert!(before(d1, d2, test_issue).is_ok());
        assert!(before(d1, d1, test_issue).is_err());
        assert!(after(d2, d1, test_issue).is_ok());
        assert!(after(d2, d2, test_issue).is_err());
    }

    #[test]
    fn collector_accumulates_in_order() {
        let mut acc = Collector::new();
        acc.check(required(None::<i32>, || {
            error("first").at(Location::new("Test", "T1", "a"))
        }));
        acc.check(required(Some(1), || {
            error("unreachable").at(Location::new("Test", "T1", "b"))
        }));
        acc.push(warning("second").at(Location::new("Test", "T1", "c")));

        let issues = acc.into_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "first");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[1].message, "second");
    }
}
