//! Groups a check run's findings by file path.

use std::collections::BTreeMap;

use ecslint_checker::{CheckResult, Diagnostic};

/// Findings for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Checkers that produced a diff for this file.
    ///
    /// First-seen order across the run's diff records, duplicates collapsed
    /// to their first occurrence.
    pub checkers: Vec<String>,

    /// Diagnostics in discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Groups diagnostics and applied-fix records by relative path.
///
/// A path is present iff it has at least one diagnostic or one diff, and
/// paths iterate in ascending byte-wise lexicographic order. Pure function
/// of its input; the result does not alias it.
pub fn aggregate(result: &CheckResult) -> BTreeMap<String, FileReport> {
    let mut reports: BTreeMap<String, FileReport> = BTreeMap::new();

    for diagnostic in &result.diagnostics {
        reports
            .entry(diagnostic.relative_path.clone())
            .or_default()
            .diagnostics
            .push(diagnostic.clone());
    }

    for diff in &result.file_diffs {
        let report = reports.entry(diff.relative_path.clone()).or_default();
        for checker in &diff.applied_checkers {
            if !report.checkers.contains(checker) {
                report.checkers.push(checker.clone());
            }
        }
    }

    reports
}
