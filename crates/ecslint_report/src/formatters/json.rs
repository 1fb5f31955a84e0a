//! JSON output formatter.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use ecslint_checker::{CheckResult, Configuration};

use crate::aggregate::aggregate;
use crate::exit_status::{DefaultExitStatusResolver, ExitStatusResolver};
use crate::formatters::OutputFormatter;

/// Renders a check run as a pretty-printed JSON document.
pub struct JsonFormatter {
    resolver: Box<dyn ExitStatusResolver>,
}

impl JsonFormatter {
    /// Formatter name.
    pub const NAME: &'static str = "json";

    /// Creates a formatter delegating exit status to `resolver`.
    pub fn new(resolver: Box<dyn ExitStatusResolver>) -> Self {
        Self { resolver }
    }

    /// Renders the full document for `result`.
    pub fn create_json_content(&self, result: &CheckResult) -> Result<String, serde_json::Error> {
        let document = JsonReport::from_result(result);
        serde_json::to_string_pretty(&document)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(Box::new(DefaultExitStatusResolver))
    }
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn report(
        &self,
        result: &CheckResult,
        configuration: &Configuration,
        out: &mut dyn Write,
    ) -> io::Result<i32> {
        debug!(
            "Rendering JSON report for {} diagnostics and {} diffs",
            result.error_count(),
            result.file_diff_count()
        );

        let json = self.create_json_content(result)?;
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")?;

        Ok(self.resolver.resolve(result, configuration))
    }
}

/// Root JSON document.
#[derive(Debug, Serialize)]
struct JsonReport {
    totals: Totals,
    files: BTreeMap<String, JsonFileReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    system_errors: Vec<String>,
}

impl JsonReport {
    fn from_result(result: &CheckResult) -> Self {
        let files = aggregate(result)
            .into_iter()
            .map(|(path, report)| {
                (
                    path,
                    JsonFileReport {
                        applied_checkers: report.checkers,
                        errors: report
                            .diagnostics
                            .iter()
                            .map(|d| JsonError {
                                line: d.line,
                                source: format!("ECS.{}", d.checker),
                                message: d.message.clone(),
                            })
                            .collect(),
                    },
                )
            })
            .collect();

        Self {
            totals: Totals {
                errors: result.error_count(),
                file_diffs: result.file_diff_count(),
            },
            files,
            system_errors: result.system_errors.clone(),
        }
    }
}

/// Run totals.
#[derive(Debug, Serialize)]
struct Totals {
    errors: usize,
    file_diffs: usize,
}

/// Findings for one file.
#[derive(Debug, Serialize)]
struct JsonFileReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    applied_checkers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError>,
}

/// One reported violation.
#[derive(Debug, Serialize)]
struct JsonError {
    line: u32,
    source: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use ecslint_checker::{Diagnostic, FileDiff};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn json_empty_run() {
        let json = JsonFormatter::default()
            .create_json_content(&CheckResult::default())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["totals"]["errors"], 0);
        assert_eq!(parsed["totals"]["file_diffs"], 0);
        assert!(parsed["files"].as_object().unwrap().is_empty());
    }

    #[test]
    fn json_groups_findings_by_file() {
        let result = CheckResult::new(
            vec![Diagnostic::new(5, "some message", "SpacingSniff", "a.php")],
            vec![FileDiff::new(
                "a.php",
                "x",
                "y",
                vec!["LineLengthFixer".to_string()],
            )],
            vec![],
        );

        let json = JsonFormatter::default().create_json_content(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let file = &parsed["files"]["a.php"];
        assert_eq!(file["applied_checkers"][0], "LineLengthFixer");
        assert_eq!(file["errors"][0]["line"], 5);
        assert_eq!(file["errors"][0]["source"], "ECS.SpacingSniff");
        assert_eq!(file["errors"][0]["message"], "some message");
    }

    #[test]
    fn json_rendering_is_deterministic() {
        let result = CheckResult::new(
            vec![
                Diagnostic::new(1, "m", "Sniff", "b.php"),
                Diagnostic::new(1, "m", "Sniff", "a.php"),
            ],
            vec![],
            vec![],
        );

        let formatter = JsonFormatter::default();

        assert_eq!(
            formatter.create_json_content(&result).unwrap(),
            formatter.create_json_content(&result).unwrap()
        );
    }

    #[test]
    fn json_passes_system_errors_through() {
        let result = CheckResult::new(vec![], vec![], vec!["cache unwritable".to_string()]);

        let json = JsonFormatter::default().create_json_content(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["system_errors"][0], "cache unwritable");
    }

    #[test]
    fn report_writes_document_and_resolves_status() {
        let formatter = JsonFormatter::default();
        let mut out = Vec::new();
        let status = formatter
            .report(&CheckResult::default(), &Configuration::default(), &mut out)
            .unwrap();

        assert_eq!(status, 0);
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn formatter_is_selected_by_name() {
        assert_eq!(JsonFormatter::default().name(), "json");
    }
}
