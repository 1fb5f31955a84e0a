//! Sequential file processors.
//!
//! These implement the pipeline capability contract for single files:
//! registered checkers run in registration order, one file per call, no
//! scheduling of their own. Parallel execution and caching belong to an
//! outer engine.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{CheckResult, Configuration, Diagnostic, FileDiff, Fixer, ProcessorError, Sniff};

/// Capability contract of a configured checking pipeline.
///
/// An empty `checkers()` list denotes "not configured".
pub trait FileProcessor {
    /// Names of the registered checkers.
    fn checkers(&self) -> Vec<String>;

    /// Applies the registered rewriting checkers to the file's content and
    /// returns the result without persisting it.
    fn process_file_to_string(&self, path: &Path) -> Result<String, ProcessorError>;

    /// Checks the file and returns what was found without rewriting it.
    fn process_file(
        &self,
        path: &Path,
        configuration: &Configuration,
    ) -> Result<CheckResult, ProcessorError>;
}

/// Runs registered fixers against single files.
///
/// Content is folded through every fixer in registration order; a later
/// fixer sees the output of the earlier ones.
#[derive(Default)]
pub struct FixerProcessor {
    fixers: Vec<Box<dyn Fixer>>,
}

impl FixerProcessor {
    /// Creates a processor with no fixers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixer. Order of registration is order of application.
    pub fn register(&mut self, fixer: Box<dyn Fixer>) {
        self.fixers.push(fixer);
    }
}

impl FileProcessor for FixerProcessor {
    fn checkers(&self) -> Vec<String> {
        self.fixers.iter().map(|f| f.name().to_string()).collect()
    }

    fn process_file_to_string(&self, path: &Path) -> Result<String, ProcessorError> {
        debug!("Fixing {}", path.display());
        let content = read_file(path)?;

        Ok(self
            .fixers
            .iter()
            .fold(content, |text, fixer| fixer.fix(&text)))
    }

    fn process_file(
        &self,
        path: &Path,
        _configuration: &Configuration,
    ) -> Result<CheckResult, ProcessorError> {
        debug!("Checking {} for fixable violations", path.display());
        let before = read_file(path)?;

        let mut content = before.clone();
        let mut applied_checkers = Vec::new();
        for fixer in &self.fixers {
            let fixed = fixer.fix(&content);
            if fixed != content {
                applied_checkers.push(fixer.name().to_string());
                content = fixed;
            }
        }

        let mut file_diffs = Vec::new();
        if !applied_checkers.is_empty() {
            let relative_path = path.to_string_lossy().into_owned();
            file_diffs.push(FileDiff::new(relative_path, before, content, applied_checkers));
        }

        Ok(CheckResult::new(Vec::new(), file_diffs, Vec::new()))
    }
}

/// Runs registered sniffs against single files.
#[derive(Default)]
pub struct SniffProcessor {
    sniffs: Vec<Box<dyn Sniff>>,
}

impl SniffProcessor {
    /// Creates a processor with no sniffs registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sniff. Order of registration is order of execution.
    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        self.sniffs.push(sniff);
    }
}

impl FileProcessor for SniffProcessor {
    fn checkers(&self) -> Vec<String> {
        self.sniffs.iter().map(|s| s.name().to_string()).collect()
    }

    /// Sniffs never rewrite; the file's content is returned unchanged.
    fn process_file_to_string(&self, path: &Path) -> Result<String, ProcessorError> {
        read_file(path)
    }

    fn process_file(
        &self,
        path: &Path,
        _configuration: &Configuration,
    ) -> Result<CheckResult, ProcessorError> {
        debug!("Sniffing {}", path.display());
        let content = read_file(path)?;
        let relative_path = path.to_string_lossy();

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        for sniff in &self.sniffs {
            diagnostics.extend(sniff.sniff(&relative_path, &content));
        }

        Ok(CheckResult::new(diagnostics, Vec::new(), Vec::new()))
    }
}

fn read_file(path: &Path) -> Result<String, ProcessorError> {
    fs::read_to_string(path)
        .map_err(|e| ProcessorError::file(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    struct ReplaceFixer {
        name: &'static str,
        from: &'static str,
        to: &'static str,
    }

    impl Fixer for ReplaceFixer {
        fn name(&self) -> &str {
            self.name
        }

        fn fix(&self, content: &str) -> String {
            content.replace(self.from, self.to)
        }
    }

    struct MarkerSniff;

    impl Sniff for MarkerSniff {
        fn name(&self) -> &str {
            "MarkerSniff"
        }

        fn sniff(&self, relative_path: &str, content: &str) -> Vec<Diagnostic> {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains("MARKER"))
                .map(|(index, _)| {
                    Diagnostic::new(
                        index as u32 + 1,
                        "marker left in file",
                        "MarkerSniff",
                        relative_path,
                    )
                })
                .collect()
        }
    }

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn fixer_processor_lists_registered_checkers() {
        let mut processor = FixerProcessor::new();
        assert!(processor.checkers().is_empty());

        processor.register(Box::new(ReplaceFixer {
            name: "AFixer",
            from: "a",
            to: "b",
        }));
        processor.register(Box::new(ReplaceFixer {
            name: "BFixer",
            from: "b",
            to: "c",
        }));

        assert_eq!(
            processor.checkers(),
            vec!["AFixer".to_string(), "BFixer".to_string()]
        );
    }

    #[test]
    fn fixers_apply_in_registration_order() {
        let mut processor = FixerProcessor::new();
        processor.register(Box::new(ReplaceFixer {
            name: "AFixer",
            from: "a",
            to: "b",
        }));
        processor.register(Box::new(ReplaceFixer {
            name: "BFixer",
            from: "b",
            to: "c",
        }));

        let file = file_with("a\n");
        let fixed = processor.process_file_to_string(file.path()).unwrap();

        // AFixer turns "a" into "b", BFixer then turns that "b" into "c".
        assert_eq!(fixed, "c\n");
    }

    #[test]
    fn process_file_records_one_diff_per_file() {
        let mut processor = FixerProcessor::new();
        processor.register(Box::new(ReplaceFixer {
            name: "AFixer",
            from: "a",
            to: "b",
        }));
        processor.register(Box::new(ReplaceFixer {
            name: "NoopFixer",
            from: "zzz",
            to: "zzz",
        }));

        let file = file_with("a\n");
        let result = processor
            .process_file(file.path(), &Configuration::default())
            .unwrap();

        assert_eq!(result.file_diff_count(), 1);
        let diff = &result.file_diffs[0];
        assert_eq!(diff.before, "a\n");
        assert_eq!(diff.after, "b\n");
        assert_eq!(diff.applied_checkers, vec!["AFixer".to_string()]);
    }

    #[test]
    fn process_file_reports_nothing_for_clean_content() {
        let mut processor = FixerProcessor::new();
        processor.register(Box::new(ReplaceFixer {
            name: "AFixer",
            from: "a",
            to: "b",
        }));

        let file = file_with("clean\n");
        let result = processor
            .process_file(file.path(), &Configuration::default())
            .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn sniff_processor_never_rewrites() {
        let mut processor = SniffProcessor::new();
        processor.register(Box::new(MarkerSniff));

        let file = file_with("MARKER\n");
        let content = processor.process_file_to_string(file.path()).unwrap();

        assert_eq!(content, "MARKER\n");
    }

    #[test]
    fn sniff_processor_collects_diagnostics() {
        let mut processor = SniffProcessor::new();
        processor.register(Box::new(MarkerSniff));

        let file = file_with("ok\nMARKER\nok\nMARKER\n");
        let result = processor
            .process_file(file.path(), &Configuration::default())
            .unwrap();

        assert_eq!(result.error_count(), 2);
        assert_eq!(result.diagnostics[0].line, 2);
        assert_eq!(result.diagnostics[1].line, 4);
        assert!(result.file_diffs.is_empty());
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let processor = SniffProcessor::new();
        let error = processor
            .process_file_to_string(Path::new("does/not/exist.php"))
            .unwrap_err();

        assert!(matches!(error, ProcessorError::File(_)));
        assert!(error.to_string().contains("does/not/exist.php"));
    }
}
