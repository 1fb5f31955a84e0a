//! Exit status resolution.

use ecslint_checker::{CheckResult, Configuration};

/// Maps a finished run to a process exit status.
///
/// Policy lives behind this trait so embedding tools can supply their own.
/// The one fixed point: a run with nothing to report resolves to 0.
pub trait ExitStatusResolver {
    /// Resolves the exit status for `result`.
    fn resolve(&self, result: &CheckResult, configuration: &Configuration) -> i32;
}

/// Default policy: anything left to fix fails the run.
///
/// Diagnostics and system errors always fail. Diffs fail a check-only run;
/// in a fixing run they were already applied and resolve to success.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExitStatusResolver;

impl ExitStatusResolver for DefaultExitStatusResolver {
    fn resolve(&self, result: &CheckResult, configuration: &Configuration) -> i32 {
        if result.error_count() > 0 || !result.system_errors.is_empty() {
            return 1;
        }

        if result.file_diff_count() > 0 && !configuration.is_fix {
            return 1;
        }

        0
    }
}
