//! Checkstyle XML output formatter.
//!
//! Renders the aggregated run as a checkstyle document: one `<file>` block
//! per path, a warning-level summary entry per applied checker and an
//! error-level entry per diagnostic. Attribute order within each entry is
//! part of the output contract; downstream consumers parse attributes
//! positionally.

use std::io::{self, Write};

use tracing::debug;

use ecslint_checker::{CheckResult, Configuration, Diagnostic};

use crate::aggregate::aggregate;
use crate::exit_status::{DefaultExitStatusResolver, ExitStatusResolver};
use crate::formatters::OutputFormatter;

/// Renders a check run as a checkstyle XML document.
pub struct CheckstyleFormatter {
    resolver: Box<dyn ExitStatusResolver>,
}

impl CheckstyleFormatter {
    /// Formatter name.
    pub const NAME: &'static str = "checkstyle";

    /// Creates a formatter delegating exit status to `resolver`.
    pub fn new(resolver: Box<dyn ExitStatusResolver>) -> Self {
        Self { resolver }
    }

    /// Renders the full document for `result`.
    pub fn create_xml_content(&self, result: &CheckResult) -> String {
        let mut document = CheckstyleDocument::new();

        for (path, report) in aggregate(result) {
            let mut block = FileBlock::new(path);
            for checker in &report.checkers {
                block.push(ReportEntry::checker_summary(checker));
            }
            for diagnostic in &report.diagnostics {
                block.push(ReportEntry::error(diagnostic));
            }
            document.push_file(block);
        }

        document.render()
    }
}

impl Default for CheckstyleFormatter {
    fn default() -> Self {
        Self::new(Box::new(DefaultExitStatusResolver))
    }
}

impl OutputFormatter for CheckstyleFormatter {
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
            "Rendering checkstyle report for {} diagnostics and {} diffs",
            result.error_count(),
            result.file_diff_count()
        );

        let xml = self.create_xml_content(result);
        out.write_all(xml.as_bytes())?;

        Ok(self.resolver.resolve(result, configuration))
    }
}

/// One report entry with its attributes in emission order.
struct ReportEntry {
    attributes: Vec<(&'static str, String)>,
}

impl ReportEntry {
    /// Summary entry for a checker that produced a diff. Carries no line.
    fn checker_summary(checker: &str) -> Self {
        Self {
            attributes: vec![
                ("severity", "warning".to_string()),
                ("source", format!("ECS.{checker}")),
                ("message", format!("Found violation(s) of type {checker}")),
            ],
        }
    }

    /// Entry for one reported violation.
    fn error(diagnostic: &Diagnostic) -> Self {
        Self {
            attributes: vec![
                ("line", diagnostic.line.to_string()),
                ("severity", "error".to_string()),
                ("source", format!("ECS.{}", diagnostic.checker)),
                ("message", diagnostic.message.clone()),
            ],
        }
    }
}

/// A `<file>` block and its entries.
struct FileBlock {
    name: String,
    entries: Vec<ReportEntry>,
}

impl FileBlock {
    fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }
}

/// Accumulates file blocks and serializes the document once.
struct CheckstyleDocument {
    files: Vec<FileBlock>,
}

impl CheckstyleDocument {
    fn new() -> Self {
        Self { files: Vec::new() }
    }

    fn push_file(&mut self, block: FileBlock) {
        self.files.push(block);
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        // A file appears only when it carries at least one entry.
        let files: Vec<&FileBlock> = self.files.iter().filter(|f| !f.entries.is_empty()).collect();

        if files.is_empty() {
            out.push_str("<checkstyle/>\n");
            return out;
        }

        out.push_str("<checkstyle>\n");
        for file in files {
            out.push_str("  <file name=\"");
            out.push_str(&escape_xml(&file.name));
            out.push_str("\">\n");

            for entry in &file.entries {
                out.push_str("    <error");
                for (name, value) in &entry.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_xml(value));
                    out.push('"');
                }
                out.push_str("/>\n");
            }

            out.push_str("  </file>\n");
        }
        out.push_str("</checkstyle>\n");

        out
    }
}

/// Escapes special XML characters in a string.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
