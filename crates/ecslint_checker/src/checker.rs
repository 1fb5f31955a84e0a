//! Checker capability traits.
//!
//! A checker is either a [`Sniff`], which reports violations without
//! touching content, or a [`Fixer`], which rewrites content to resolve
//! them. Processors hold checkers as trait objects so heterogeneous rule
//! sets can be registered side by side.

use crate::Diagnostic;

/// A checker that reports violations without modifying content.
pub trait Sniff {
    /// Checker name, used as the source identifier in reports.
    fn name(&self) -> &str;

    /// Scans `content` and returns the violations found.
    ///
    /// `relative_path` is recorded on each diagnostic as given.
    fn sniff(&self, relative_path: &str, content: &str) -> Vec<Diagnostic>;
}

/// A checker that rewrites content to resolve violations.
pub trait Fixer {
    /// Checker name, used as the source identifier in reports.
    fn name(&self) -> &str;

    /// Returns the fixed content.
    ///
    /// Must return the input unchanged when there is nothing to fix.
    fn fix(&self, content: &str) -> String;
}
