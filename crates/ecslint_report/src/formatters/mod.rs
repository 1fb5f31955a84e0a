//! Report document formatters.

mod checkstyle;
mod json;

pub use checkstyle::CheckstyleFormatter;
pub use json::JsonFormatter;

use std::io::{self, Write};

use ecslint_checker::{CheckResult, Configuration};

/// A formatter that renders a finished run and resolves its exit status.
pub trait OutputFormatter {
    /// Name the formatter is selected by.
    fn name(&self) -> &'static str;

    /// Writes the rendered report to `out` and returns the exit status
    /// resolved for the unmodified `result`.
    fn report(
        &self,
        result: &CheckResult,
        configuration: &Configuration,
        out: &mut dyn Write,
    ) -> io::Result<i32>;
}
