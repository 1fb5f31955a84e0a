//! Value types produced by a check run.

use serde::{Deserialize, Serialize};

/// A single unfixed style violation reported by a sniff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line the violation was reported on.
    pub line: u32,

    /// Human-readable description of the violation.
    pub message: String,

    /// Name of the checker that reported it.
    pub checker: String,

    /// Path of the offending file, relative to the working directory.
    pub relative_path: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(
        line: u32,
        message: impl Into<String>,
        checker: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Self {
        Self {
            line,
            message: message.into(),
            checker: checker.into(),
            relative_path: relative_path.into(),
        }
    }
}

/// One applied-fix result for a single file.
///
/// Multiple diffs may exist for the same path, one per fixer pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Path of the fixed file, relative to the working directory.
    pub relative_path: String,

    /// File content before the fix.
    pub before: String,

    /// File content after the fix.
    pub after: String,

    /// Names of the checkers that produced this diff. Never empty.
    pub applied_checkers: Vec<String>,
}

impl FileDiff {
    /// Creates a new file diff.
    pub fn new(
        relative_path: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
        applied_checkers: Vec<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            before: before.into(),
            after: after.into(),
            applied_checkers,
        }
    }
}

/// Everything a single check run produced.
///
/// Owned transiently by the call that renders a report; formatters never
/// mutate it. `system_errors` is passed through to consumers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Unfixed violations, in discovery order.
    pub diagnostics: Vec<Diagnostic>,

    /// Applied-fix records, in application order.
    pub file_diffs: Vec<FileDiff>,

    /// Failures outside any one checker.
    pub system_errors: Vec<String>,
}

impl CheckResult {
    /// Creates a new check result.
    pub fn new(
        diagnostics: Vec<Diagnostic>,
        file_diffs: Vec<FileDiff>,
        system_errors: Vec<String>,
    ) -> Self {
        Self {
            diagnostics,
            file_diffs,
            system_errors,
        }
    }

    /// Returns the number of reported violations.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns the number of applied-fix records.
    pub fn file_diff_count(&self) -> usize {
        self.file_diffs.len()
    }

    /// Returns true when the run found nothing to report.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.file_diffs.is_empty() && self.system_errors.is_empty()
    }
}
